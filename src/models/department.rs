// src/models/department.rs

//! Static department registry.
//!
//! Each department ("svið") publishes one exam fragment upstream, addressed by
//! a numeric `svidID`, and owns exactly one cache key derived from that id.

use serde::Serialize;

use crate::error::{AppError, Result};

/// Prefix shared by every department cache key.
pub const CACHE_KEY_PREFIX: &str = "dept";

/// Glob matching every department cache key.
pub const DEPARTMENT_KEY_PATTERN: &str = "dept*";

/// A department with exams listed on the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Department {
    /// Display name
    pub name: &'static str,

    /// URL-safe identifier used for lookups
    pub slug: &'static str,

    /// Upstream `svidID` query parameter
    #[serde(skip)]
    pub source_id: u8,
}

impl Department {
    /// Cache key owned by this department.
    pub fn cache_key(&self) -> String {
        cache_key(self.source_id)
    }
}

static DEPARTMENTS: [Department; 5] = [
    Department {
        name: "Félagsvísindasvið",
        slug: "felagsvisindasvid",
        source_id: 1,
    },
    Department {
        name: "Heilbrigðisvísindasvið",
        slug: "heilbrigdisvisindasvid",
        source_id: 2,
    },
    Department {
        name: "Hugvísindasvið",
        slug: "hugvisindasvid",
        source_id: 3,
    },
    Department {
        name: "Menntavísindasvið",
        slug: "menntavisindasvid",
        source_id: 4,
    },
    Department {
        name: "Verkfræði- og náttúruvísindasvið",
        slug: "verkfraedi-og-natturuvisindasvid",
        source_id: 5,
    },
];

/// Result of resolving a slug against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub department: &'static Department,
    pub source_id: u8,
    pub cache_key: String,
}

/// All registered departments, in registry order.
pub fn departments() -> &'static [Department] {
    &DEPARTMENTS
}

/// Derive the cache key for an upstream source id.
pub fn cache_key(source_id: u8) -> String {
    format!("{CACHE_KEY_PREFIX}{source_id}")
}

/// Resolve a slug to its upstream source id and cache key.
pub fn resolve(slug: &str) -> Result<Resolved> {
    let department = DEPARTMENTS
        .iter()
        .find(|d| d.slug == slug)
        .ok_or_else(|| AppError::UnknownDepartment(slug.to_string()))?;

    Ok(Resolved {
        department,
        source_id: department.source_id,
        cache_key: department.cache_key(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_resolve_all_registered() {
        let mut keys = HashSet::new();
        let mut ids = HashSet::new();

        for dept in departments() {
            let resolved = resolve(dept.slug).unwrap();
            assert_eq!(resolved.department, dept);
            assert!(keys.insert(resolved.cache_key));
            assert!(ids.insert(resolved.source_id));
        }

        assert_eq!(keys.len(), 5);
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_cache_keys_follow_registry_order() {
        let keys: Vec<String> = departments().iter().map(|d| d.cache_key()).collect();
        assert_eq!(keys, ["dept1", "dept2", "dept3", "dept4", "dept5"]);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve("laeknadeild").unwrap_err();
        assert!(matches!(err, AppError::UnknownDepartment(ref s) if s == "laeknadeild"));
        assert!(resolve("").is_err());
        assert!(resolve("Hugvisindasvid").is_err());
    }

    #[test]
    fn test_names_non_empty_and_slugs_url_safe() {
        for dept in departments() {
            assert!(!dept.name.is_empty());
            assert!(
                dept.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-')
            );
        }
    }
}
