//! Saving and loading validated schemas as a compact binary artifact,
//! so repeated runs skip JSON parsing and field-type validation.

use crate::error::ArtifactError;
use crate::schema::Schema;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A validated schema in its storable form.
#[derive(Serialize, Deserialize)]
pub struct CompiledSchema {
    pub schema: Schema,
}

impl CompiledSchema {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Saves the compiled schema to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = encode_to_vec(self, standard()).map_err(|e| ArtifactError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path)
            .map_err(|e| ArtifactError::Io(format!("Could not create file '{}': {}", path, e)))?;
        file.write_all(&bytes)
            .map_err(|e| ArtifactError::Io(format!("Could not write to file '{}': {}", path, e)))?;
        Ok(())
    }

    /// Loads a compiled schema from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Io(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| ArtifactError::Io(format!("Could not read from file '{}': {}", path, e)))?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a compiled schema from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Decode(e.to_string()))
    }
}
