use crate::config::Config;
#[cfg(test)]
use crate::domain::Source;
use crate::sources::abc::AbcSource;
use crate::sources::courier_mail::CourierMailSource;
use crate::sources::sbs::SbsSource;
use crate::sources::traits::NewsSource;
use crate::sources::weatherzone::WeatherzoneSource;

/// The fixed set of scraped sources, in the order shared by preview, digest
/// and save: live pages first, then the archived snapshots.
pub struct SourceRegistry {
    sources: Vec<Box<dyn NewsSource>>,
}

impl SourceRegistry {
    pub fn new(config: &Config) -> Self {
        Self::from_sources(vec![
            Box::new(AbcSource::new()),
            Box::new(SbsSource::new()),
            Box::new(WeatherzoneSource::new(config.weatherzone_path.clone())),
            Box::new(CourierMailSource::new(config.courier_mail_path.clone())),
        ])
    }

    pub fn from_sources(sources: Vec<Box<dyn NewsSource>>) -> Self {
        Self { sources }
    }

    pub fn all(&self) -> impl Iterator<Item = &dyn NewsSource> {
        self.sources.iter().map(|s| s.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_fixed_source_order() {
        let registry = SourceRegistry::new(&Config::default());
        let order: Vec<Source> = registry.all().map(|s| s.source()).collect();
        assert_eq!(order, Source::ALL);
    }

    #[test]
    fn test_archived_sources_point_at_configured_paths() {
        let config = Config::default();
        let registry = SourceRegistry::new(&config);

        for source in registry.all().filter(|s| !s.source().is_live()) {
            match source.origin() {
                crate::sources::Origin::Archived(path) => {
                    assert!(path.to_string_lossy().ends_with(".xml"));
                }
                crate::sources::Origin::Live(_) => panic!("archived source with live origin"),
            }
        }
    }
}
