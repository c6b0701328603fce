//! Open slot counts per capability.

use super::person::Capability;

/// Mapping from capability to the number of open slots needing it.
///
/// Keys are unique. Iteration follows insertion order, which is also the
/// order in which the generator lets capabilities pick candidates: when a
/// person qualifies for several requested capabilities, earlier entries
/// get first claim on them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<(Capability, usize)>", into = "Vec<(Capability, usize)>")
)]
pub struct RoleRequirements {
    entries: Vec<(Capability, usize)>,
}

impl RoleRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the count for a capability, keeping its original position if
    /// it was already present.
    pub fn set(&mut self, capability: impl Into<Capability>, count: usize) {
        let capability = capability.into();
        match self.entries.iter_mut().find(|(c, _)| *c == capability) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((capability, count)),
        }
    }

    /// Adds `count` open slots to a capability.
    pub fn add(&mut self, capability: impl Into<Capability>, count: usize) {
        let capability = capability.into();
        match self.entries.iter_mut().find(|(c, _)| *c == capability) {
            Some(entry) => entry.1 += count,
            None => self.entries.push((capability, count)),
        }
    }

    /// Sets the count for a capability.
    pub fn with(mut self, capability: impl Into<Capability>, count: usize) -> Self {
        self.set(capability, count);
        self
    }

    /// Requested count for a capability (0 when absent).
    pub fn get(&self, capability: &str) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| c == capability)
            .map_or(0, |(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    /// Number of distinct capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all requested counts.
    pub fn total_slots(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

impl<C: Into<Capability>> FromIterator<(C, usize)> for RoleRequirements {
    fn from_iter<I: IntoIterator<Item = (C, usize)>>(iter: I) -> Self {
        let mut requirements = Self::new();
        for (capability, count) in iter {
            requirements.add(capability, count);
        }
        requirements
    }
}

/// Repeated capabilities are merged, their counts summed.
impl From<Vec<(Capability, usize)>> for RoleRequirements {
    fn from(entries: Vec<(Capability, usize)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<RoleRequirements> for Vec<(Capability, usize)> {
    fn from(requirements: RoleRequirements) -> Self {
        requirements.entries
    }
}
