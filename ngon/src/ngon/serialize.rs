use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Ngon;
use crate::vertices::VertexBuffer;

/// N-gons are serialized as a sequence of their vertices.
impl<const N: usize, S> Serialize for Ngon<N, S>
where
    S: VertexBuffer,
    S::Point: Serialize,
{
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.vertices().serialize(serializer)
    }
}

/// Deserialization fails if the number of vertices is not `N`.
impl<'de, const N: usize, P> Deserialize<'de> for Ngon<N, Vec<P>>
where
    P: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let vertices = Vec::<P>::deserialize(deserializer)?;
        Self::new(vertices).map_err(D::Error::custom)
    }
}
