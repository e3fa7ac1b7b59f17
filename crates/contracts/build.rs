//! Build script validating the embedded catalog data
//!
//! The catalog JSON files are compiled into the crate with `include_str!`,
//! so a malformed file is rejected here instead of at runtime.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const ALL_SENTINEL: &str = "*";

fn main() {
    println!("cargo:rerun-if-changed=data");
    println!("cargo:rerun-if-changed=../../config.toml");

    let data_dir = Path::new("data");

    let certificates: Vec<CertificateJson> = read_json(&data_dir.join("certificates.json"));
    let _testimonials: Vec<TestimonialJson> = read_json(&data_dir.join("testimonials.json"));
    let filters: Vec<FilterJson> = read_json(&data_dir.join("filters.json"));

    check_unique_titles(&certificates);
    check_filters(&filters, &certificates);
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
struct CertificateJson {
    title: String,
    #[allow(dead_code)]
    subtitle: String,
    #[allow(dead_code)]
    image: String,
    category: String,
    #[allow(dead_code)]
    year: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct TestimonialJson {
    name: String,
    role: String,
    testimonial: String,
    rating: i64,
}

#[derive(Debug, Deserialize)]
struct FilterJson {
    name: String,
    value: String,
}

// ============================================================================
// Checks
// ============================================================================

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("Malformed catalog data in {}: {}", path.display(), e))
}

/// Duplicate titles are tolerated at runtime but make render keys ambiguous.
fn check_unique_titles(certificates: &[CertificateJson]) {
    let mut seen = HashSet::new();
    for cert in certificates {
        if !seen.insert(cert.title.as_str()) {
            println!(
                "cargo:warning=Duplicate certificate title: \"{}\"",
                cert.title
            );
        }
        if cert.category == ALL_SENTINEL {
            panic!(
                "Certificate \"{}\" uses the reserved category \"{}\"",
                cert.title, ALL_SENTINEL
            );
        }
    }
}

fn check_filters(filters: &[FilterJson], certificates: &[CertificateJson]) {
    let categories: HashSet<&str> = certificates.iter().map(|c| c.category.as_str()).collect();
    for filter in filters {
        if filter.value != ALL_SENTINEL && !categories.contains(filter.value.as_str()) {
            println!(
                "cargo:warning=Filter \"{}\" matches no certificate (value \"{}\")",
                filter.name, filter.value
            );
        }
    }
}
