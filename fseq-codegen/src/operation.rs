use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumMessage};

/// The operations every generated module exposes.
///
/// The set is closed: every specialization has exactly these, with the same
/// names and arities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumMessage)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    /// Wrap a producer into a sequence.
    ///
    /// `Sequence::new(producer: impl Producer) -> Sequence`
    New,
    /// A sequence over a borrowed slice, in order.
    ///
    /// `Sequence::lift(items: &[T]) -> Sequence`
    Lift,
    /// An infinite producer of one value.
    ///
    /// `repeat(value: T) -> Repeat`
    Repeat,
    /// Transform each element as it is pulled.
    ///
    /// `sequence.map(f: FnMut(T) -> T) -> Sequence`
    Map,
    /// Keep the elements matching a predicate.
    ///
    /// `sequence.filter(predicate: FnMut(&T) -> bool) -> Sequence`
    Filter,
    /// Keep the elements not matching a predicate.
    ///
    /// `sequence.exclude(predicate: FnMut(&T) -> bool) -> Sequence`
    Exclude,
    /// Yield at most the first n elements.
    ///
    /// `sequence.take(n: usize) -> Sequence`
    Take,
    /// Discard the first n elements.
    ///
    /// `sequence.drop(n: usize) -> Sequence`
    Drop,
    /// Yield one sequence after another.
    ///
    /// `sequence.chain(other: Sequence) -> Sequence`
    Chain,
    /// Pull to exhaustion into a vector.
    ///
    /// `sequence.collect() -> Vec<T>`
    Collect,
    /// Left fold from a seed with f(accumulator, element).
    ///
    /// `sequence.fold(seed: T, f: FnMut(T, T) -> T) -> T`
    Fold,
}

/// Where an operation sits in a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum OperationKind {
    Constructor,
    Combinator,
    Terminal,
}

impl Operation {
    pub fn all() -> impl Iterator<Item = Operation> {
        Operation::iter()
    }

    pub fn kind(self) -> OperationKind {
        match self {
            Operation::New | Operation::Lift | Operation::Repeat => OperationKind::Constructor,
            Operation::Map
            | Operation::Filter
            | Operation::Exclude
            | Operation::Take
            | Operation::Drop
            | Operation::Chain => OperationKind::Combinator,
            Operation::Collect | Operation::Fold => OperationKind::Terminal,
        }
    }

    /// One-line description of what the operation does.
    pub fn summary(&self) -> &str {
        self.documentation_pieces().0
    }

    /// The operation's signature in the generated module, with `T` standing
    /// for the element type.
    pub fn signature(&self) -> &str {
        self.documentation_pieces().1
    }

    fn documentation_pieces(&self) -> (&str, &str) {
        if let Some(documentation) = self.get_documentation() {
            let mut pieces = documentation.splitn(2, "\n\n");
            let first = pieces.next().unwrap_or("").trim();
            let second = pieces.next().unwrap_or("").trim().trim_matches('`');
            (first, second)
        } else {
            ("", "")
        }
    }

    /// The name the operation is defined under in generated source.
    pub fn item_name(self) -> &'static str {
        match self {
            Operation::New => "fn new",
            Operation::Lift => "fn lift",
            Operation::Repeat => "fn repeat",
            Operation::Map => "fn map",
            Operation::Filter => "fn filter",
            Operation::Exclude => "fn exclude",
            Operation::Take => "fn take",
            Operation::Drop => "fn drop",
            Operation::Chain => "fn chain",
            Operation::Collect => "fn collect",
            Operation::Fold => "fn fold",
        }
    }
}
