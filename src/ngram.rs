//! N-gram generation with stopword filtering
//!
//! Windows are generated for every start index `i` and every requested order
//! `n`, iterating `i` outward and `n` in request order. A window is only
//! emitted when `i + n < len`, checked as `n < len - i` so huge orders cannot
//! overflow. The last complete window of every order is never produced: for
//! a sequence of length `L` an order yields at most `L - n` windows. Feature
//! files generated so far depend on this boundary.
//!
//! A window is dropped when its first unit, lowercased, is a stopword. Interior
//! units are never checked, and the check lowercases regardless of how the
//! text itself was normalized.

use crate::stopwords::StopwordSet;
use crate::tokenize::{TokenMode, TokenSequence};

/// Builds feature strings from a token sequence
#[derive(Debug, Clone)]
pub struct NGramGenerator {
    orders: Vec<usize>,
    joiner: &'static str,
    stopwords: StopwordSet,
}

impl NGramGenerator {
    #[must_use]
    pub fn new(orders: Vec<usize>, mode: TokenMode, stopwords: StopwordSet) -> Self {
        Self {
            orders,
            joiner: mode.joiner(),
            stopwords,
        }
    }

    /// Generator with a custom joiner
    #[must_use]
    pub const fn with_joiner(
        orders: Vec<usize>,
        joiner: &'static str,
        stopwords: StopwordSet,
    ) -> Self {
        Self {
            orders,
            joiner,
            stopwords,
        }
    }

    #[must_use]
    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    /// Feature strings in window order
    #[must_use]
    pub fn generate(&self, tokens: &TokenSequence<'_>) -> Vec<String> {
        self.windows(tokens.as_slice())
            .map(|window| window.join(self.joiner))
            .collect()
    }

    /// The surviving windows, before joining
    pub fn windows<'s, 't>(
        &'s self,
        units: &'t [&'t str],
    ) -> impl Iterator<Item = &'t [&'t str]> + 's
    where
        't: 's,
    {
        let len = units.len();
        (0..len)
            .filter(move |&i| !self.stopwords.contains_folded(units[i]))
            .flat_map(move |i| {
                self.orders
                    .iter()
                    .filter(move |&&n| n < len - i)
                    .map(move |&n| &units[i..i + n])
            })
    }
}

/// Count of windows an order admits before stopword filtering
#[must_use]
pub const fn window_count(len: usize, order: usize) -> usize {
    len.saturating_sub(order)
}
