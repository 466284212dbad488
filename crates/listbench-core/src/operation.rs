//! Catalogue of measured operations.
//!
//! [`Operation`] names each of the six suite methods so the harness can
//! select them by include pattern, and [`Outcome`] gives their results a
//! single type.

use std::fmt;

use crate::suite::BenchmarkSuite;

/// Group name every operation id is qualified with.
pub const SUITE_NAME: &str = "lists";

/// One measured operation of [`BenchmarkSuite`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`BenchmarkSuite::append_array`].
    AppendArray,
    /// [`BenchmarkSuite::append_linked`].
    AppendLinked,
    /// [`BenchmarkSuite::get_array`].
    GetArray,
    /// [`BenchmarkSuite::get_linked`].
    GetLinked,
    /// [`BenchmarkSuite::remove_array_head`].
    RemoveArrayHead,
    /// [`BenchmarkSuite::remove_linked_head`].
    RemoveLinkedHead,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 6] = [
        Operation::AppendArray,
        Operation::AppendLinked,
        Operation::GetArray,
        Operation::GetLinked,
        Operation::RemoveArrayHead,
        Operation::RemoveLinkedHead,
    ];

    /// Short benchmark name, e.g. `"append_array"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::AppendArray => "append_array",
            Self::AppendLinked => "append_linked",
            Self::GetArray => "get_array",
            Self::GetLinked => "get_linked",
            Self::RemoveArrayHead => "remove_array_head",
            Self::RemoveLinkedHead => "remove_linked_head",
        }
    }

    /// Benchmark id qualified with the suite name, e.g. `"lists/get_array"`.
    pub fn id(self) -> String {
        format!("{SUITE_NAME}/{}", self.name())
    }

    /// Whether the operation changes the suite's shared lists.
    ///
    /// Only the appends do; removals work on a copy.
    pub fn is_mutating(self) -> bool {
        matches!(self, Self::AppendArray | Self::AppendLinked)
    }

    /// Operations whose qualified id contains `include`, in declaration
    /// order. An empty pattern selects everything.
    pub fn discover(include: &str) -> Vec<Operation> {
        Self::ALL
            .into_iter()
            .filter(|op| op.id().contains(include))
            .collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Success indicator from an append.
    Appended(bool),
    /// Element read by a get, or removed by a remove.
    Element(Option<i32>),
}

impl BenchmarkSuite {
    /// Run `op` once against this suite.
    pub fn invoke(&mut self, op: Operation) -> Outcome {
        match op {
            Operation::AppendArray => Outcome::Appended(self.append_array()),
            Operation::AppendLinked => Outcome::Appended(self.append_linked()),
            Operation::GetArray => Outcome::Element(self.get_array()),
            Operation::GetLinked => Outcome::Element(self.get_linked()),
            Operation::RemoveArrayHead => Outcome::Element(self.remove_array_head()),
            Operation::RemoveLinkedHead => Outcome::Element(self.remove_linked_head()),
        }
    }
}
