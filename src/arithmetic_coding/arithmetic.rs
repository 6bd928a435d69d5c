use log::{debug, info, trace};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::tools::freq_count::freqs;

/// Smallest number of decimal digits used when a value is written out.
pub const MIN_DIGITS: usize = 50;

/// The cumulative probability slot of one symbol: `[low, high)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInterval {
    pub symbol: char,
    pub freq: u32,
    pub low: BigRational,
    pub high: BigRational,
}

impl SymbolInterval {
    /// Probability of the symbol, `high - low`.
    pub fn probability(&self) -> BigRational {
        &self.high - &self.low
    }
}

/// The static model: one slot per distinct symbol, in symbol order, partitioning `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticModel {
    pub total: usize,
    pub intervals: Vec<SymbolInterval>,
}

impl ArithmeticModel {
    /// Build the model from the symbol frequencies of `text`. An empty text gives an empty model.
    pub fn from_text(text: &str) -> Self {
        let data = text.chars().collect::<Vec<char>>();
        let total = data.len();
        let mut intervals = Vec::new();
        // Guard against a zero total before dividing
        if total == 0 {
            return Self { total, intervals };
        }

        let denom = BigInt::from(total);
        let mut cumulative = BigRational::zero();
        for (symbol, freq) in freqs(&data) {
            let prob = BigRational::new(BigInt::from(freq), denom.clone());
            let high = &cumulative + &prob;
            intervals.push(SymbolInterval {
                symbol,
                freq,
                low: cumulative,
                high: high.clone(),
            });
            cumulative = high;
        }
        debug!(
            "Arithmetic model: {} symbols, {} distinct, cumulative {}",
            total,
            intervals.len(),
            cumulative
        );
        Self { total, intervals }
    }

    /// Find the slot for a symbol.
    pub fn lookup(&self, symbol: char) -> Option<&SymbolInterval> {
        self.intervals
            .binary_search_by_key(&symbol, |slot| slot.symbol)
            .ok()
            .map(|i| &self.intervals[i])
    }
}

/// The working range `[low, high)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub low: BigRational,
    pub high: BigRational,
}

impl Interval {
    pub fn unit() -> Self {
        Self {
            low: BigRational::zero(),
            high: BigRational::one(),
        }
    }

    pub fn width(&self) -> BigRational {
        &self.high - &self.low
    }

    pub fn midpoint(&self) -> BigRational {
        (&self.low + &self.high) / BigRational::from_integer(BigInt::from(2))
    }

    /// Narrow to the proportional part of this interval given by `slot`.
    fn narrow(&mut self, slot: &SymbolInterval) {
        let width = self.width();
        self.high = &self.low + &width * &slot.high;
        self.low = &self.low + &width * &slot.low;
    }
}

/// The working interval after one symbol has been coded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticStep {
    pub symbol: char,
    pub low: BigRational,
    pub high: BigRational,
}

/// Output of [`arith_encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArithmeticOutput {
    pub model: ArithmeticModel,
    pub interval: Interval,
    /// Midpoint of the final interval.
    pub value: BigRational,
    pub steps: Vec<ArithmeticStep>,
}

/// Arithmetic encode the text with exact rational arithmetic.
pub fn arith_encode(text: &str) -> ArithmeticOutput {
    let model = ArithmeticModel::from_text(text);
    let mut interval = Interval::unit();
    let mut steps = Vec::with_capacity(model.total);

    for symbol in text.chars() {
        // The model was built from this text, so every symbol has a slot
        if let Some(slot) = model.lookup(symbol) {
            interval.narrow(slot);
            trace!("'{}' -> [{}, {})", symbol, interval.low, interval.high);
            steps.push(ArithmeticStep {
                symbol,
                low: interval.low.clone(),
                high: interval.high.clone(),
            });
        }
    }

    let value = interval.midpoint();
    info!(
        "Arithmetic coded {} symbols, final denominator has {} bits",
        model.total,
        interval.width().denom().bits()
    );
    ArithmeticOutput {
        model,
        interval,
        value,
        steps,
    }
}

/// Reverse the narrowing: recover `length` symbols from a value inside the final interval.
/// Returns None if the value falls outside every slot.
pub fn arith_decode(value: &BigRational, model: &ArithmeticModel, length: usize) -> Option<String> {
    let mut interval = Interval::unit();
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        let scaled = (value - &interval.low) / interval.width();
        let slot = model
            .intervals
            .iter()
            .find(|slot| slot.low <= scaled && scaled < slot.high)?;
        out.push(slot.symbol);
        interval.narrow(slot);
    }
    Some(out)
}

/// Number of decimal digits to use for a text of `len` symbols.
pub fn precision(len: usize, min_digits: usize) -> usize {
    min_digits.max(2 * len)
}

/// Write a non-negative rational as a decimal, truncated to `digits` fractional digits.
/// Trailing zeros are dropped, keeping at least one fractional digit.
pub fn to_decimal(value: &BigRational, digits: usize) -> String {
    let numer = value.numer();
    let denom = value.denom();
    let int_part = numer / denom;
    let rem = numer % denom;

    let scale = BigInt::from(10).pow(digits as u32);
    let frac = (rem * scale / denom).to_string();
    let mut frac = format!("{}{}", "0".repeat(digits.saturating_sub(frac.len())), frac);
    while frac.len() > 1 && frac.ends_with('0') {
        frac.pop();
    }
    format!("{}.{}", int_part, frac)
}

#[cfg(test)]
mod test {
    use super::*;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn arith_aab_test() {
        let out = arith_encode("aab");
        assert_eq!(out.model.intervals[0].probability(), ratio(2, 3));
        assert_eq!(out.model.intervals[1].low, ratio(2, 3));
        assert_eq!(out.interval.low, ratio(8, 27));
        assert_eq!(out.interval.high, ratio(12, 27));
        assert_eq!(out.value, ratio(10, 27));
        assert_eq!(out.steps.len(), 3);
        assert_eq!(out.steps[1].high, ratio(4, 9));
    }

    #[test]
    fn arith_probabilities_sum_test() {
        let model = ArithmeticModel::from_text("abracadabra alakazam");
        let sum = model
            .intervals
            .iter()
            .fold(BigRational::zero(), |acc, slot| acc + slot.probability());
        assert_eq!(sum, BigRational::one());
        assert_eq!(model.intervals.last().unwrap().high, BigRational::one());
        // Slots are contiguous and in symbol order
        for pair in model.intervals.windows(2) {
            assert_eq!(pair[0].high, pair[1].low);
            assert!(pair[0].symbol < pair[1].symbol);
        }
    }

    #[test]
    fn arith_width_is_product_test() {
        let text = "mississippi";
        let out = arith_encode(text);
        let product = text.chars().fold(BigRational::one(), |acc, c| {
            acc * out.model.lookup(c).unwrap().probability()
        });
        assert_eq!(out.interval.width(), product);
        assert!(BigRational::zero() <= out.interval.low);
        assert!(out.interval.low < out.interval.high);
        assert!(out.interval.high <= BigRational::one());
    }

    #[test]
    fn arith_single_symbol_test() {
        // One distinct symbol owns the whole unit interval
        let out = arith_encode("zzzz");
        assert_eq!(out.interval, Interval::unit());
        assert_eq!(out.value, ratio(1, 2));
        assert_eq!(arith_decode(&out.value, &out.model, 4).unwrap(), "zzzz");
    }

    #[test]
    fn arith_empty_test() {
        let out = arith_encode("");
        assert!(out.model.intervals.is_empty());
        assert_eq!(out.interval, Interval::unit());
        assert!(out.steps.is_empty());
    }

    #[test]
    fn arith_decode_long_test() {
        let text = "Винни шагал мимо сосен и елок, шагал по склонам, заросшим можжевельником и репейником, \
                    шагал по крутым берегам ручьев и речек, шагал среди груд камней и снова среди зарослей";
        let out = arith_encode(text);
        let len = text.chars().count();
        assert_eq!(arith_decode(&out.value, &out.model, len).unwrap(), text);
        assert_eq!(arith_encode(text), out);
    }

    #[test]
    fn precision_test() {
        assert_eq!(precision(10, MIN_DIGITS), 50);
        assert_eq!(precision(40, MIN_DIGITS), 80);
    }

    #[test]
    fn to_decimal_test() {
        assert_eq!(to_decimal(&ratio(1, 3), 5), "0.33333");
        assert_eq!(to_decimal(&ratio(1, 2), 50), "0.5");
        assert_eq!(to_decimal(&ratio(1, 1), 3), "1.0");
        assert_eq!(to_decimal(&ratio(1, 40), 3), "0.025");
        assert_eq!(to_decimal(&ratio(1, 4000), 3), "0.0");
    }
}
