//! Early-exit scanning of integer sequences for zero elements.
//!
//! ## Algorithm
//!
//! 1. Walk the sequence in order, classifying each element as zero or not
//! 2. Stop at the first element that settles the answer for the scan [`Mode`]
//! 3. If the sequence runs out first, the answer is the mode's default
//!
//! Elements after the deciding one are never pulled from the iterator, so
//! lazily converted sources (see [`Checker::try_scan`]) never see them.
//!
//! ## Extensibility
//!
//! The [`ZeroCheck`] trait works on pre-classified flags and is object safe,
//! so alternative strategies can sit behind a `dyn ZeroCheck`:
//!
//! ```
//! use nonzero_core::checker::{Scan, ZeroCheck};
//! use nonzero_core::Result;
//!
//! struct Exhaustive;
//!
//! impl ZeroCheck for Exhaustive {
//!     fn scan_flags(&self, flags: &mut dyn Iterator<Item = Result<bool>>) -> Result<Scan> {
//!         let mut inspected = 0;
//!         let mut decision = true;
//!         for flag in flags {
//!             decision &= !flag?;
//!             inspected += 1;
//!         }
//!         Ok(Scan { decision, decided_at: None, inspected })
//!     }
//! }
//! ```

mod zero;

use crate::error::{Error, Result};
use tracing::{debug, trace};

pub use zero::{Int, IsZero};

/// Which question a scan answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// True if no element equals zero; empty sequences are true
    #[default]
    AllNonzero,
    /// True if at least one element differs from zero; empty sequences are false
    AnyNonzero,
}

impl Mode {
    /// Returns the answer settled by an element, or `None` to keep scanning
    fn decide(self, is_zero: bool) -> Option<bool> {
        match (self, is_zero) {
            (Mode::AllNonzero, true) => Some(false),
            (Mode::AnyNonzero, false) => Some(true),
            _ => None,
        }
    }

    /// Answer for a sequence that ran out without settling
    fn exhausted(self) -> bool {
        matches!(self, Mode::AllNonzero)
    }
}

/// Outcome of a single scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    /// The boolean answer
    pub decision: bool,
    /// Index of the element that settled the answer, if the scan stopped early
    pub decided_at: Option<usize>,
    /// Number of elements compared against zero
    pub inspected: usize,
}

impl Scan {
    /// Returns true if the scan stopped before the end of the sequence
    pub fn exited_early(&self) -> bool {
        self.decided_at.is_some()
    }
}

/// Configuration for the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckerConfig {
    /// Question the scan answers
    pub mode: Mode,
    /// Maximum number of elements to inspect (0 = unlimited)
    pub max_elements: usize,
}

impl CheckerConfig {
    /// Creates a new checker config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scan mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the maximum number of elements a scan may inspect
    pub fn max_elements(mut self, max: usize) -> Self {
        self.max_elements = max;
        self
    }
}

/// Strategy for scanning a stream of zero/non-zero flags
pub trait ZeroCheck: Send + Sync {
    /// Scan flags in order, where `Ok(true)` marks an element equal to zero
    fn scan_flags(&self, flags: &mut dyn Iterator<Item = Result<bool>>) -> Result<Scan>;

    /// Scan flags and return only the answer
    fn check_flags(&self, flags: &mut dyn Iterator<Item = Result<bool>>) -> Result<bool> {
        self.scan_flags(flags).map(|scan| scan.decision)
    }
}

/// Primary checker with early exit
#[derive(Debug, Clone, Copy, Default)]
pub struct Checker {
    config: CheckerConfig,
}

impl Checker {
    /// Creates a new checker with default configuration
    pub fn new() -> Self {
        Self {
            config: CheckerConfig::default(),
        }
    }

    /// Creates a new checker with custom configuration
    pub fn with_config(config: CheckerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Scan a sequence of integers
    pub fn scan<I>(&self, items: I) -> Result<Scan>
    where
        I: IntoIterator,
        I::Item: IsZero,
    {
        self.scan_flags(&mut items.into_iter().map(|item| Ok::<bool, Error>(item.is_zero())))
    }

    /// Scan a sequence whose elements are converted on the fly.
    ///
    /// Conversion errors propagate, but only for elements the scan reaches.
    pub fn try_scan<I, T>(&self, items: I) -> Result<Scan>
    where
        I: IntoIterator<Item = Result<T>>,
        T: IsZero,
    {
        self.scan_flags(&mut items.into_iter().map(|item| item.map(|v| v.is_zero())))
    }

    /// Scan a sequence of integers and return only the answer
    pub fn check<I>(&self, items: I) -> Result<bool>
    where
        I: IntoIterator,
        I::Item: IsZero,
    {
        self.scan(items).map(|scan| scan.decision)
    }

    /// Scan converted elements and return only the answer
    pub fn try_check<I, T>(&self, items: I) -> Result<bool>
    where
        I: IntoIterator<Item = Result<T>>,
        T: IsZero,
    {
        self.try_scan(items).map(|scan| scan.decision)
    }
}

impl ZeroCheck for Checker {
    fn scan_flags(&self, flags: &mut dyn Iterator<Item = Result<bool>>) -> Result<Scan> {
        let mode = self.config.mode;
        let limit = self.config.max_elements;
        let mut inspected = 0;

        for (index, flag) in flags.enumerate() {
            if limit > 0 && index >= limit {
                debug!("Scan hit element cap of {}", limit);
                return Err(Error::too_many_elements(limit));
            }

            let is_zero = flag?;
            inspected += 1;
            trace!("Element {} is_zero={}", index, is_zero);

            if let Some(decision) = mode.decide(is_zero) {
                debug!(
                    "Scan ({:?}) decided {} at index {} after {} elements",
                    mode, decision, index, inspected
                );
                return Ok(Scan {
                    decision,
                    decided_at: Some(index),
                    inspected,
                });
            }
        }

        let decision = mode.exhausted();
        debug!(
            "Scan ({:?}) exhausted {} elements, decided {}",
            mode, inspected, decision
        );
        Ok(Scan {
            decision,
            decided_at: None,
            inspected,
        })
    }
}

/// Returns true if no element of the sequence equals zero.
///
/// Stops at the first zero. An empty sequence has no zero element and yields
/// `true`.
pub fn nonzero<I>(items: I) -> bool
where
    I: IntoIterator,
    I::Item: IsZero,
{
    items.into_iter().all(|item| !item.is_zero())
}

/// Returns true if at least one element of the sequence differs from zero.
///
/// Stops at the first non-zero element. An empty sequence yields `false`.
pub fn any_nonzero<I>(items: I) -> bool
where
    I: IntoIterator,
    I::Item: IsZero,
{
    items.into_iter().any(|item| !item.is_zero())
}

/// [`nonzero`] over elements that may fail to convert to an integer
pub fn try_nonzero<I, T>(items: I) -> Result<bool>
where
    I: IntoIterator<Item = Result<T>>,
    T: IsZero,
{
    Checker::new().try_check(items)
}

/// [`any_nonzero`] over elements that may fail to convert to an integer
pub fn try_any_nonzero<I, T>(items: I) -> Result<bool>
where
    I: IntoIterator<Item = Result<T>>,
    T: IsZero,
{
    Checker::with_config(CheckerConfig::new().mode(Mode::AnyNonzero)).try_check(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nonzero_examples() {
        assert!(nonzero(Vec::<i64>::new()));
        assert!(!nonzero([0]));
        assert!(!nonzero([0, 0, 0]));
        assert!(!nonzero([0, 1, 0]));
        assert!(nonzero([5]));
        assert!(nonzero([-3, 7, 1]));
    }

    #[test]
    fn test_any_nonzero_examples() {
        assert!(!any_nonzero(Vec::<i64>::new()));
        assert!(!any_nonzero([0]));
        assert!(!any_nonzero([0, 0, 0]));
        assert!(any_nonzero([0, 1, 0]));
        assert!(any_nonzero([5]));
    }

    #[test]
    fn test_nonzero_idempotent() {
        let data = vec![4u8, 0, 9];
        let first = nonzero(&data);
        assert_eq!(nonzero(&data), first);
        assert_eq!(nonzero(&data), first);
        assert_eq!(data, vec![4, 0, 9]);
    }

    #[test]
    fn test_scan_early_exit() {
        let scan = Checker::new().scan([1, 2, 0, 3, 0]).unwrap();
        assert_eq!(
            scan,
            Scan {
                decision: false,
                decided_at: Some(2),
                inspected: 3,
            }
        );
        assert!(scan.exited_early());
    }

    #[test]
    fn test_scan_exhausted() {
        let scan = Checker::new().scan([1, 2, 3]).unwrap();
        assert_eq!(
            scan,
            Scan {
                decision: true,
                decided_at: None,
                inspected: 3,
            }
        );
        assert!(!scan.exited_early());
    }

    #[test]
    fn test_scan_any_mode() {
        let checker = Checker::with_config(CheckerConfig::new().mode(Mode::AnyNonzero));
        let scan = checker.scan([0, 0, -1, 0]).unwrap();
        assert!(scan.decision);
        assert_eq!(scan.decided_at, Some(2));

        let scan = checker.scan([0, 0]).unwrap();
        assert!(!scan.decision);
        assert_eq!(scan.inspected, 2);
    }

    #[test]
    fn test_iterator_not_pulled_past_decision() {
        let data = [3, 0, 5, 6];
        let mut pulled = 0;
        let items = data.iter().inspect(|_| pulled += 1);
        assert!(!nonzero(items));
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_try_nonzero_stops_before_error() {
        let items = vec![Ok(Int::ZERO), Err(Error::invalid_element(1, "str"))];
        assert_eq!(try_nonzero(items), Ok(false));
    }

    #[test]
    fn test_try_nonzero_propagates_error() {
        let items = vec![Ok(Int::Small(1)), Err(Error::invalid_element(1, "float"))];
        assert_eq!(try_nonzero(items), Err(Error::invalid_element(1, "float")));
    }

    #[test]
    fn test_try_any_nonzero() {
        let items: Vec<Result<Int>> = vec![Ok(Int::ZERO), Ok(Int::Big { negative: true })];
        assert_eq!(try_any_nonzero(items), Ok(true));
        assert_eq!(try_any_nonzero(Vec::<Result<Int>>::new()), Ok(false));
    }

    #[test]
    fn test_max_elements() {
        let checker = Checker::with_config(CheckerConfig::new().max_elements(2));
        assert_eq!(checker.check([1, 2, 3]), Err(Error::too_many_elements(2)));
        assert_eq!(checker.check([1, 0, 3]), Ok(false));
        assert_eq!(checker.check([1, 2]), Ok(true));
    }

    #[test]
    fn test_checker_config_builder() {
        let config = CheckerConfig::new().mode(Mode::AnyNonzero).max_elements(10);

        assert_eq!(config.mode, Mode::AnyNonzero);
        assert_eq!(config.max_elements, 10);
        assert_eq!(*Checker::with_config(config).config(), config);
        assert_eq!(CheckerConfig::new().mode, Mode::AllNonzero);
    }

    #[test]
    fn test_dyn_zero_check() {
        let strategy: Box<dyn ZeroCheck> = Box::new(Checker::new());
        let mut flags = [false, false].into_iter().map(Ok::<bool, Error>);
        assert_eq!(strategy.check_flags(&mut flags), Ok(true));
    }
}
