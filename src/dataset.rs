//! The one dataset this tool knows how to fetch.

use serde::Serialize;

use crate::error::FetchError;

/// HG004 (Ashkenazim mother) PacBio HiFi reads from the GIAB RNA-seq collection.
pub const DATASET_URL: &str = "https://ftp-trace.ncbi.nlm.nih.gov/ReferenceSamples/giab/data_RNAseq/AshkenazimTrio/HG004_NA24143_mother/Baylor_PacBio/reads/m64139_220124_190646.hifi_reads.bam";

pub const METADATA_FILE_NAME: &str = "dataset_metadata.json";

/// Platform/technology record written next to the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetDescriptor {
    pub platform: &'static str,
    pub technology: &'static str,
}

pub const DESCRIPTOR: DatasetDescriptor = DatasetDescriptor {
    platform: "PacBio",
    technology: "IsoSeq",
};

/// Last path segment of `url`, ignoring any query string or fragment.
pub fn artifact_file_name(url: &str) -> Result<&str, FetchError> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let path = without_fragment.split('?').next().unwrap_or(without_fragment);
    // Only look past the scheme/authority so "https://host" has no segment.
    let path = match path.find("://") {
        Some(idx) => {
            let rest = &path[idx + 3..];
            rest.find('/').map_or("", |slash| &rest[slash..])
        }
        None => path,
    };
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => Ok(name),
        _ => Err(FetchError::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_url_yields_bam_name() {
        assert_eq!(
            artifact_file_name(DATASET_URL).unwrap(),
            "m64139_220124_190646.hifi_reads.bam"
        );
    }

    #[test]
    fn query_and_fragment_are_not_part_of_the_name() {
        let name = artifact_file_name("https://example.org/a/b/reads.bam?download=true#top").unwrap();
        assert_eq!(name, "reads.bam");
    }

    #[test]
    fn trailing_slash_is_rejected() {
        let err = artifact_file_name("https://example.org/data/").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn bare_host_is_rejected() {
        assert!(artifact_file_name("https://example.org").is_err());
    }

    #[test]
    fn descriptor_values_are_fixed() {
        assert_eq!(DESCRIPTOR.platform, "PacBio");
        assert_eq!(DESCRIPTOR.technology, "IsoSeq");
    }
}
