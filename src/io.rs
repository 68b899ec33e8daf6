//! Reading and writing GeoJSON files

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::geojson::FeatureCollection;

/// Parse a feature collection from GeoJSON text.
/// Fails if the top-level `type` is not "FeatureCollection".
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    let collection: FeatureCollection = serde_json::from_str(text)?;
    if !collection.is_feature_collection() {
        return Err(Error::NotAFeatureCollection(collection.kind));
    }
    Ok(collection)
}

/// Read and parse a GeoJSON feature collection file
pub fn read_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    parse_feature_collection(&text)
}

/// Serialize a collection as compact JSON (no insignificant whitespace)
pub fn to_compact_json(collection: &FeatureCollection) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(collection)?)
}

/// Write a collection as compact JSON, returning the number of bytes written.
/// The document is fully serialized before the file is touched.
pub fn write_feature_collection<P: AsRef<Path>>(path: P, collection: &FeatureCollection) -> Result<u64> {
    let path = path.as_ref();
    let bytes = to_compact_json(collection)?;
    fs::write(path, &bytes).map_err(|e| Error::io(path, e))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_feature() {
        let err = parse_feature_collection(r#"{"type":"Feature","geometry":null,"properties":{}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::NotAFeatureCollection(_)));
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        let err = parse_feature_collection(r#"{"type":"FeatureCollection","features":["#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_feature_collection("does/not/exist.geojson").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_compact_output() {
        let collection = parse_feature_collection(
            r#"{ "type": "FeatureCollection", "features": [ ] }"#,
        )
        .unwrap();
        let bytes = to_compact_json(&collection).unwrap();
        assert_eq!(bytes, br#"{"type":"FeatureCollection","features":[]}"#);
    }
}
