use maxminddb::{geoip2, MaxMindDBError, Metadata, Mmap, Reader};
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the GeoIP database collaborator.
///
/// "Address not in database" is not an error; it surfaces as `Ok(None)` from
/// [`GeoDatabase::country_name`].
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("failed to open GeoIP database {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: MaxMindDBError,
    },

    #[error("GeoIP lookup failed: {0}")]
    Lookup(MaxMindDBError),
}

/// Handle to a memory-mapped MaxMind country database.
///
/// Opened once at startup and dropped at scope exit; lookups never mutate it.
#[derive(Debug)]
pub struct GeoDatabase {
    reader: Reader<Mmap>,
}

impl GeoDatabase {
    /// Open a database file read-only, memory-mapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GeoError> {
        let path = path.as_ref();
        let reader = Reader::open_mmap(path).map_err(|source| GeoError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(GeoDatabase { reader })
    }

    /// English country name for an address, if the database has one.
    pub fn country_name(&self, ip: IpAddr) -> Result<Option<String>, GeoError> {
        match self.reader.lookup::<geoip2::Country>(ip) {
            Ok(record) => Ok(english_name(record.country.and_then(|c| c.names))),
            Err(MaxMindDBError::AddressNotFoundError(_)) => Ok(None),
            Err(e) => Err(GeoError::Lookup(e)),
        }
    }

    /// Metadata of the opened database (type, format version, build epoch).
    pub fn metadata(&self) -> &Metadata {
        &self.reader.metadata
    }
}

/// Pick the English name out of a localized name map. Only a non-empty
/// `"en"` entry counts; anything else is "no country name".
fn english_name(names: Option<BTreeMap<&str, &str>>) -> Option<String> {
    let name = names?.get("en").copied()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_path() {
        let result = GeoDatabase::open("/nonexistent/path/Country.mmdb");
        assert!(matches!(result, Err(GeoError::Open { .. })));
    }

    #[test]
    fn test_open_error_mentions_path() {
        let err = GeoDatabase::open("/nonexistent/path/Country.mmdb").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/path/Country.mmdb"));
    }

    #[test]
    fn test_english_name_present() {
        let mut names = BTreeMap::new();
        names.insert("en", "United States");
        names.insert("ja", "アメリカ合衆国");
        assert_eq!(
            english_name(Some(names)),
            Some("United States".to_string())
        );
    }

    #[test]
    fn test_english_name_missing_locale() {
        let mut names = BTreeMap::new();
        names.insert("fr", "États Unis");
        assert_eq!(english_name(Some(names)), None);
    }

    #[test]
    fn test_english_name_empty_string() {
        let mut names = BTreeMap::new();
        names.insert("en", "");
        assert_eq!(english_name(Some(names)), None);
    }

    #[test]
    fn test_english_name_no_map() {
        assert_eq!(english_name(None), None);
    }
}
