use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors arising from exchange-rate quotes.
#[derive(Debug, Error, PartialEq)]
pub enum ExchangeRateError {
    #[error("exchange rate must be positive, got {side} = {rate}")]
    NonPositive { side: &'static str, rate: Decimal },
    #[error("sell rate {sell} is below buy rate {buy}")]
    InvertedSpread { buy: Decimal, sell: Decimal },
}

/// A local-currency per USD quote as delivered by a rate provider.
///
/// The engine only ever consumes `sell`. Fetching and caching quotes is the
/// provider's business.
///
/// # Examples
///
/// ```
/// use pda_engine::core::exchange::ExchangeQuote;
/// use chrono::Utc;
/// use rust_decimal_macros::dec;
///
/// let quote = ExchangeQuote::new(dec!(1400), dec!(1450), Utc::now()).unwrap();
/// assert_eq!(quote.sell(), dec!(1450));
///
/// assert!(ExchangeQuote::new(dec!(0), dec!(1450), Utc::now()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    buy: Decimal,
    sell: Decimal,
    date: DateTime<Utc>,
}

impl ExchangeQuote {
    pub fn new(buy: Decimal, sell: Decimal, date: DateTime<Utc>) -> Result<Self, ExchangeRateError> {
        if buy <= Decimal::ZERO {
            return Err(ExchangeRateError::NonPositive {
                side: "buy",
                rate: buy,
            });
        }
        if sell <= Decimal::ZERO {
            return Err(ExchangeRateError::NonPositive {
                side: "sell",
                rate: sell,
            });
        }
        if sell < buy {
            return Err(ExchangeRateError::InvertedSpread { buy, sell });
        }
        Ok(Self { buy, sell, date })
    }

    pub fn buy(&self) -> Decimal {
        self.buy
    }

    pub fn sell(&self) -> Decimal {
        self.sell
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

impl fmt::Display for ExchangeQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ARS/USD buy {} sell {} ({})",
            self.buy,
            self.sell,
            self.date.format("%Y-%m-%d")
        )
    }
}

/// A rate is usable as a divisor only when strictly positive.
pub fn usable_rate(rate: Option<Decimal>) -> Option<Decimal> {
    rate.filter(|r| *r > Decimal::ZERO)
}
