//! The three updaters run by each poll cycle.
//!
//! An updater fetches from its source and renders label text. It never
//! touches the display board: it returns the slot updates, or the first
//! error it hit, and the caller decides what to do with either.

use std::fmt;

use rust_decimal::Decimal;
use sentiment_core::{
    format_fixed, latest_close, AssetSentiment, IndexTicker, Price, PriceQuote, SlotId,
    SlotUpdate, TradingPair, VolatilitySentiment,
};
use sentiment_feed::{
    DailyBarSource, EconomicIndicators, FeedError, FeedResult, IndicatorSource, TickerSource,
};

/// Crypto pairs with their price and sentiment slots, in display order.
pub const CRYPTO_PAIRS: [(TradingPair, SlotId, SlotId); 2] = [
    (TradingPair::BTC_USDT, SlotId::BtcPrice, SlotId::BtcSentiment),
    (TradingPair::ETH_USDT, SlotId::EthPrice, SlotId::EthSentiment),
];

/// Updater identity, used in logs and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdaterKind {
    Crypto,
    Equity,
    Economic,
}

impl UpdaterKind {
    /// Run order within a cycle.
    pub const ORDER: [UpdaterKind; 3] = [Self::Crypto, Self::Equity, Self::Economic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crypto => "crypto",
            Self::Equity => "equity",
            Self::Economic => "economic",
        }
    }
}

impl fmt::Display for UpdaterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetch both crypto tickers and render their four slots.
///
/// Both tickers are fetched before anything is rendered, so a failure on
/// either pair yields no updates at all.
pub async fn update_crypto<S: TickerSource>(source: &S) -> FeedResult<Vec<SlotUpdate>> {
    let mut quotes = Vec::with_capacity(CRYPTO_PAIRS.len());
    for (pair, _, _) in CRYPTO_PAIRS {
        quotes.push(source.fetch_ticker(pair).await?);
    }

    let mut updates = Vec::with_capacity(CRYPTO_PAIRS.len() * 2);
    for ((_, price_slot, sentiment_slot), quote) in CRYPTO_PAIRS.iter().zip(&quotes) {
        updates.extend(render_crypto(quote, *price_slot, *sentiment_slot)?);
    }

    Ok(updates)
}

/// Render one quote into `"{X} Price: $p"` and `"{X} Sentiment: label (c%)"`.
pub fn render_crypto(
    quote: &PriceQuote,
    price_slot: SlotId,
    sentiment_slot: SlotId,
) -> FeedResult<[SlotUpdate; 2]> {
    let change = quote
        .change_pct_24h
        .ok_or_else(|| FeedError::MissingField {
            symbol: quote.symbol.clone(),
            field: "priceChangePercent",
        })?;

    let sentiment = AssetSentiment::from_change_pct(change);

    Ok([
        SlotUpdate::rendered(price_slot, quote.last.to_usd()),
        SlotUpdate::rendered(
            sentiment_slot,
            format!("{sentiment} ({}%)", format_fixed(change)),
        ),
    ])
}

/// Fetch the day's index and volatility closes and render the stock tab.
///
/// If either series is empty the whole update is skipped and reported as
/// [`FeedError::EmptySeries`].
pub async fn update_equity<S: DailyBarSource>(source: &S) -> FeedResult<Vec<SlotUpdate>> {
    let index_bars = source.fetch_daily_bars(IndexTicker::SP500).await?;
    let vix_bars = source.fetch_daily_bars(IndexTicker::VIX).await?;

    let index_close = latest_close(&index_bars)
        .ok_or_else(|| FeedError::EmptySeries(IndexTicker::SP500.symbol.to_string()))?;
    let vix_close = latest_close(&vix_bars)
        .ok_or_else(|| FeedError::EmptySeries(IndexTicker::VIX.symbol.to_string()))?;

    Ok(render_equity(index_close, vix_close))
}

/// Render index price, volatility level, and the volatility-derived sentiment.
pub fn render_equity(index_close: Decimal, vix_close: Decimal) -> Vec<SlotUpdate> {
    vec![
        SlotUpdate::rendered(SlotId::SpyPrice, Price::new(index_close).to_usd()),
        SlotUpdate::rendered(SlotId::VixPrice, format_fixed(vix_close)),
        SlotUpdate::rendered(
            SlotId::SpySentiment,
            VolatilitySentiment::from_level(vix_close),
        ),
    ]
}

/// Fetch indicator readings and render the economic tab.
pub async fn update_economic<S: IndicatorSource>(source: &S) -> FeedResult<Vec<SlotUpdate>> {
    let readings = source.fetch_indicators().await?;
    Ok(render_economic(&readings))
}

pub fn render_economic(readings: &EconomicIndicators) -> Vec<SlotUpdate> {
    vec![
        SlotUpdate::rendered(SlotId::Pmi, &readings.pmi),
        SlotUpdate::rendered(SlotId::Cbbi, &readings.sentiment_index),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use sentiment_feed::StaticIndicators;

    fn text(updates: &[SlotUpdate], slot: SlotId) -> Option<&str> {
        updates
            .iter()
            .find(|u| u.slot == slot)
            .map(|u| u.text.as_str())
    }

    #[test]
    fn test_render_crypto_bullish() {
        let quote = PriceQuote::new("BTC", Price::new(dec!(65000.1234)), Some(dec!(2.5)));
        let [price, sentiment] =
            render_crypto(&quote, SlotId::BtcPrice, SlotId::BtcSentiment).unwrap();

        assert_eq!(price.text, "BTC Price: $65,000.12");
        assert_eq!(sentiment.text, "BTC Sentiment: Bullish (2.50%)");
    }

    #[test]
    fn test_render_crypto_flat_is_bearish() {
        let quote = PriceQuote::new("ETH", Price::new(dec!(3012.5)), Some(dec!(0)));
        let [price, sentiment] =
            render_crypto(&quote, SlotId::EthPrice, SlotId::EthSentiment).unwrap();

        assert_eq!(price.text, "ETH Price: $3,012.50");
        assert_eq!(sentiment.text, "ETH Sentiment: Bearish (0.00%)");
    }

    #[test]
    fn test_render_crypto_negative_change() {
        let quote = PriceQuote::new("ETH", Price::new(dec!(2999)), Some(dec!(-1.234)));
        let [_, sentiment] =
            render_crypto(&quote, SlotId::EthPrice, SlotId::EthSentiment).unwrap();
        assert_eq!(sentiment.text, "ETH Sentiment: Bearish (-1.23%)");
    }

    #[test]
    fn test_render_crypto_missing_change_is_error() {
        let quote = PriceQuote::new("BTC", Price::new(dec!(65000)), None);
        assert!(matches!(
            render_crypto(&quote, SlotId::BtcPrice, SlotId::BtcSentiment),
            Err(FeedError::MissingField { field: "priceChangePercent", .. })
        ));
    }

    #[test]
    fn test_render_equity() {
        let updates = render_equity(dec!(5431.6), dec!(22.7));

        assert_eq!(text(&updates, SlotId::SpyPrice), Some("S&P 500: $5,431.60"));
        assert_eq!(text(&updates, SlotId::VixPrice), Some("VIX: 22.70"));
        assert_eq!(
            text(&updates, SlotId::SpySentiment),
            Some("S&P 500 Sentiment: Neutral")
        );
    }

    #[test]
    fn test_render_equity_boundaries() {
        let at_15 = render_equity(dec!(5000), dec!(15));
        assert_eq!(text(&at_15, SlotId::SpySentiment), Some("S&P 500 Sentiment: Bullish"));

        let at_40 = render_equity(dec!(5000), dec!(40));
        assert_eq!(
            text(&at_40, SlotId::SpySentiment),
            Some("S&P 500 Sentiment: Very Bearish")
        );
    }

    #[tokio::test]
    async fn test_update_economic_stub() {
        let updates = update_economic(&StaticIndicators::default()).await.unwrap();
        assert_eq!(
            updates,
            vec![
                SlotUpdate::new(SlotId::Pmi, "PMI: 50.2 (Expansion)"),
                SlotUpdate::new(SlotId::Cbbi, "CBBI: 65 (Greed)"),
            ]
        );
    }
}
