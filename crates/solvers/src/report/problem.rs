/// A named equation together with the starting data to solve it from.
///
/// `df` is the derivative used by Newton-Raphson. `range` is the interval the
/// scanner samples. The three start lists are independent, so a problem can
/// give a method more or fewer starts than the others.
#[derive(Debug, Clone)]
pub struct Problem<F, D> {
    pub name: String,
    pub f: F,
    pub df: D,
    pub range: [f64; 2],
    pub brackets: Vec<[f64; 2]>,
    pub guesses: Vec<f64>,
    pub pairs: Vec<[f64; 2]>,
}

/// The starting data a report actually solved from.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Starts {
    pub brackets: Vec<[f64; 2]>,
    pub guesses: Vec<f64>,
    pub pairs: Vec<[f64; 2]>,
}

impl<F, D> Problem<F, D> {
    /// Returns the problem's own starting data.
    #[must_use]
    pub fn starts(&self) -> Starts {
        Starts {
            brackets: self.brackets.clone(),
            guesses: self.guesses.clone(),
            pairs: self.pairs.clone(),
        }
    }
}
