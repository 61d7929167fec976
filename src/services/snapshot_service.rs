use std::collections::HashMap;

use crate::domain::Snapshot;
use crate::errors::{MixerError, MixerResult};
use crate::sources::{Fetcher, SourceRegistry};

/// Runs the one-time startup extraction: fetch every registered source and
/// apply its pattern set, producing the immutable snapshot every action
/// reads from.
pub struct SnapshotService {
    registry: SourceRegistry,
    fetcher: Fetcher,
}

impl SnapshotService {
    pub fn new(registry: SourceRegistry, fetcher: Fetcher) -> Self {
        Self { registry, fetcher }
    }

    /// Fails on the first unreachable source, naming it. A source whose
    /// patterns match nothing is not a failure; it simply has zero
    /// selectable stories.
    pub fn build(&self) -> MixerResult<Snapshot> {
        let mut stories = HashMap::new();

        for source in self.registry.all() {
            let raw = self
                .fetcher
                .fetch(&source.origin())
                .map_err(|cause| MixerError::SourceUnavailable {
                    source: source.source().display_name(),
                    cause: Box::new(cause),
                })?;
            stories.insert(source.source(), source.extract(&raw));
        }

        Ok(Snapshot::new(stories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Source;
    use crate::sources::courier_mail::CourierMailSource;
    use crate::sources::weatherzone::WeatherzoneSource;
    use crate::sources::NewsSource;
    use std::io::Write;

    const WEATHERZONE_XML: &str = "\
<title>Weatherzone News</title>
<title>Weatherzone</title>
<pubDate>Mon, 14 Oct 2019 09:00:00 +1000</pubDate>
<title>Storm cells over the coast</title>
<description>Severe storms expected.</description>
";

    const COURIER_MAIL_XML: &str = "\
<title>Courier Mail</title>
<lastBuildDate>2019-10-14</lastBuildDate>
<title>Brisbane braces for hail</title>
<title>Heatwave ahead</title>
";

    fn archive_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_build_extracts_archived_sources() {
        let weatherzone = archive_file(WEATHERZONE_XML);
        let courier = archive_file(COURIER_MAIL_XML);

        let sources: Vec<Box<dyn NewsSource>> = vec![
            Box::new(WeatherzoneSource::new(weatherzone.path().to_path_buf())),
            Box::new(CourierMailSource::new(courier.path().to_path_buf())),
        ];
        let service = SnapshotService::new(SourceRegistry::from_sources(sources), Fetcher::new());

        let snapshot = service.build().unwrap();

        assert_eq!(snapshot.available(Source::Weatherzone), 1);
        assert_eq!(snapshot.available(Source::CourierMail), 2);
        let stories = snapshot.select(Source::CourierMail, 2).unwrap();
        assert_eq!(stories[0].title, "Brisbane braces for hail");
        assert_eq!(stories[0].published, "2019-10-14");
    }

    #[test]
    fn test_missing_archive_names_the_failed_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("gone.xml");

        let sources: Vec<Box<dyn NewsSource>> =
            vec![Box::new(WeatherzoneSource::new(missing))];
        let service = SnapshotService::new(SourceRegistry::from_sources(sources), Fetcher::new());

        let result = service.build();

        match result {
            Err(MixerError::SourceUnavailable { source, cause }) => {
                assert_eq!(source, "Weatherzone");
                assert!(matches!(*cause, MixerError::ArchiveNotFound(_)));
            }
            other => panic!("expected SourceUnavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_unmatched_patterns_yield_zero_available() {
        let empty = archive_file("<html>not a feed at all</html>");

        let sources: Vec<Box<dyn NewsSource>> =
            vec![Box::new(CourierMailSource::new(empty.path().to_path_buf()))];
        let service = SnapshotService::new(SourceRegistry::from_sources(sources), Fetcher::new());

        let snapshot = service.build().unwrap();
        assert_eq!(snapshot.available(Source::CourierMail), 0);
    }
}
