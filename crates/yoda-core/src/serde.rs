#![cfg(feature = "serde")]

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::grid::GridStatistics;

impl Serialize for GridStatistics {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("GridStatistics", 6)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("min", &self.min)?;
        state.serialize_field("max", &self.max)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("unique", &self.unique)?;

        state.end()
    }
}
