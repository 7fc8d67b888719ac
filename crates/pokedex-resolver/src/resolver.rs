//! The fetch-and-assemble sequence.
//!
//! [`LineageResolver::resolve`] is stateless: it holds only the source and
//! the API base, and every call is a pure function of the query to a
//! [`Resolution`] or a [`ResolveError`].

use pokedex_types::{Entity, EvolutionStage, Lineage};
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{BuildError, ResolveError, ResolveStep};
use crate::payload::{EvolutionChainPayload, PokemonPayload, SpeciesPayload, StagePayload};
use crate::source::DexSource;

/// Public `PokeAPI` v2 root.
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// A successful resolution: the searched entity and its lineage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The searched creature.
    pub entity: Entity,
    /// The evolution path containing it, root first.
    pub lineage: Lineage,
}

/// Resolves a name into an [`Entity`] and its [`Lineage`].
pub struct LineageResolver {
    source: DexSource,
    api_base: Url,
}

impl LineageResolver {
    /// Create a resolver that builds entity URLs under `api_base`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidBaseUrl`] if `api_base` is not an
    /// absolute hierarchical URL.
    pub fn new(source: DexSource, api_base: &str) -> Result<Self, BuildError> {
        let parsed = Url::parse(api_base).map_err(|e| BuildError::InvalidBaseUrl {
            url: api_base.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(BuildError::InvalidBaseUrl {
                url: api_base.to_owned(),
                reason: String::from("URL cannot carry a path"),
            });
        }
        Ok(Self {
            source,
            api_base: parsed,
        })
    }

    /// The underlying data source.
    pub const fn source(&self) -> &DexSource {
        &self.source
    }

    /// The API base URL entity lookups are built from.
    pub fn api_base(&self) -> &str {
        self.api_base.as_str()
    }

    /// URL of the `/pokemon/{name}` resource.
    pub fn entity_url(&self, name: &str) -> Url {
        let mut url = self.api_base.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("pokemon").push(name);
        }
        url
    }

    /// Resolve `name` into its entity and single-path lineage.
    ///
    /// Requests run one at a time in chain order: entity, species,
    /// evolution chain, then one entity lookup per stage from the root.
    /// Only the first child of each chain node is followed.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Validation`] if `name` is blank; nothing is fetched.
    /// - [`ResolveError::NotFound`] if the entity lookup answers non-2xx;
    ///   no further lookups are made.
    /// - [`ResolveError::Resolution`] for any other failure.
    pub async fn resolve(&self, name: &str) -> Result<Resolution, ResolveError> {
        let query = normalize_query(name)?;

        let entity_url = self.entity_url(&query);
        let response = self
            .source
            .get(entity_url.as_str())
            .await
            .map_err(|e| {
                warn!(
                    step = ResolveStep::Entity.as_str(),
                    url = entity_url.as_str(),
                    error = %e,
                    "request failed"
                );
                ResolveError::resolution(ResolveStep::Entity, e)
            })?;
        if !response.is_success() {
            info!(pokemon = query, status = response.status, "entity not found");
            return Err(ResolveError::NotFound {
                name: query,
                status: response.status,
            });
        }
        let payload: PokemonPayload = response.json().map_err(|e| {
            warn!(
                step = ResolveStep::Entity.as_str(),
                url = entity_url.as_str(),
                error = %e,
                "unexpected payload shape"
            );
            ResolveError::resolution(ResolveStep::Entity, format!("{entity_url}: {e}"))
        })?;
        let (entity, species_url) = payload.into_parts();

        let species: SpeciesPayload = self.fetch_json(ResolveStep::Species, &species_url).await?;
        let chain: EvolutionChainPayload = self
            .fetch_json(ResolveStep::EvolutionChain, &species.evolution_chain.url)
            .await?;

        let mut lineage = Lineage::new();
        let mut node = Some(&chain.chain);
        while let Some(link) = node {
            let stage_name = &link.species.name;
            let stage_url = self.entity_url(stage_name);
            let stage: StagePayload = self.fetch_json(ResolveStep::Stage, stage_url.as_str()).await?;

            lineage.push(EvolutionStage {
                name: stage_name.clone(),
                sprite_url: stage.sprites.front_default,
                min_level: link.min_level(),
            });
            node = link.first_child();
        }

        info!(
            pokemon = entity.name,
            stages = lineage.len(),
            source = self.source.name(),
            "lineage resolved"
        );
        Ok(Resolution { entity, lineage })
    }

    /// GET `url`, require a 2xx status, and decode the body.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        step: ResolveStep,
        url: &str,
    ) -> Result<T, ResolveError> {
        debug!(step = step.as_str(), url, "fetching");

        let response = self.source.get(url).await.map_err(|e| {
            warn!(step = step.as_str(), url, error = %e, "request failed");
            ResolveError::resolution(step, e)
        })?;

        if !response.is_success() {
            warn!(step = step.as_str(), url, status = response.status, "non-success status");
            return Err(ResolveError::resolution(
                step,
                format!("{url} returned status {}", response.status),
            ));
        }

        response.json().map_err(|e| {
            warn!(step = step.as_str(), url, error = %e, "unexpected payload shape");
            ResolveError::resolution(step, format!("{url}: {e}"))
        })
    }
}

/// Trim and lowercase a query, rejecting blank input.
fn normalize_query(name: &str) -> Result<String, ResolveError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::Validation);
    }
    Ok(trimmed.to_lowercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use pokedex_types::ErrorKind;

    use super::*;
    use crate::fixture::FixtureSource;
    use crate::sample::{self, BASE};

    fn resolver(source: FixtureSource) -> LineageResolver {
        LineageResolver::new(DexSource::Fixture(source), BASE).unwrap()
    }

    async fn requests(resolver: &LineageResolver) -> Vec<String> {
        match resolver.source() {
            DexSource::Fixture(fixture) => fixture.requests().await,
            DexSource::Live(_) => Vec::new(),
        }
    }

    #[test]
    fn entity_url_is_built_under_base() {
        let r = resolver(FixtureSource::new());
        assert_eq!(
            r.entity_url("charmander").as_str(),
            "https://pokeapi.test/api/v2/pokemon/charmander"
        );

        let trailing = LineageResolver::new(
            DexSource::Fixture(FixtureSource::new()),
            "https://pokeapi.test/api/v2/",
        )
        .unwrap();
        assert_eq!(
            trailing.entity_url("eevee").as_str(),
            "https://pokeapi.test/api/v2/pokemon/eevee"
        );
    }

    #[test]
    fn entity_url_escapes_path_characters() {
        let r = resolver(FixtureSource::new());
        let url = r.entity_url("a/b?c");
        assert_eq!(url.path(), "/api/v2/pokemon/a%2Fb%3Fc");
        assert!(url.query().is_none());
    }

    #[test]
    fn invalid_base_is_rejected() {
        let result = LineageResolver::new(DexSource::Fixture(FixtureSource::new()), "not a url");
        assert!(matches!(result, Err(BuildError::InvalidBaseUrl { .. })));

        let result =
            LineageResolver::new(DexSource::Fixture(FixtureSource::new()), "mailto:ash@kanto");
        assert!(matches!(result, Err(BuildError::InvalidBaseUrl { .. })));
    }

    #[tokio::test]
    async fn charmander_resolves_three_stage_line() {
        let r = resolver(sample::source());
        let resolution = r.resolve("charmander").await.unwrap();

        assert_eq!(resolution.entity.name, "charmander");
        assert_eq!(resolution.entity.abilities, vec!["blaze", "solar-power"]);
        assert_eq!(resolution.entity.types, vec!["fire"]);

        let levels: Vec<(&str, Option<u32>)> = resolution
            .lineage
            .iter()
            .map(|s| (s.name.as_str(), s.min_level))
            .collect();
        assert_eq!(
            levels,
            vec![
                ("charmander", None),
                ("charmeleon", Some(16)),
                ("charizard", Some(36)),
            ]
        );
        assert!(resolution.lineage.iter().all(|s| s.sprite_url.is_some()));
    }

    #[tokio::test]
    async fn mid_chain_query_resolves_whole_line_from_root() {
        let r = resolver(sample::source());
        let resolution = r.resolve("  CharMeleon ").await.unwrap();

        assert_eq!(resolution.entity.name, "charmeleon");
        assert_eq!(
            resolution.lineage.root().map(|s| s.name.as_str()),
            Some("charmander")
        );
        assert_eq!(resolution.lineage.len(), 3);
    }

    #[tokio::test]
    async fn requests_are_issued_in_chain_order() {
        let r = resolver(sample::source());
        r.resolve("charmander").await.unwrap();

        assert_eq!(
            requests(&r).await,
            vec![
                format!("{BASE}/pokemon/charmander"),
                format!("{BASE}/pokemon-species/4/"),
                format!("{BASE}/evolution-chain/2/"),
                format!("{BASE}/pokemon/charmander"),
                format!("{BASE}/pokemon/charmeleon"),
                format!("{BASE}/pokemon/charizard"),
            ]
        );
    }

    #[tokio::test]
    async fn branching_chain_follows_first_branch_only() {
        let r = resolver(sample::source());
        let resolution = r.resolve("eevee").await.unwrap();

        assert_eq!(resolution.lineage.names(), vec!["eevee", "vaporeon"]);
        // Item evolution: details present but no level requirement.
        assert!(resolution.lineage.iter().all(|s| s.min_level.is_none()));

        let fetched = requests(&r).await;
        assert!(!fetched.iter().any(|u| u.ends_with("/jolteon")));
        assert!(!fetched.iter().any(|u| u.ends_with("/flareon")));
    }

    #[tokio::test]
    async fn single_stage_chain() {
        let r = resolver(sample::source());
        let resolution = r.resolve("ditto").await.unwrap();
        assert_eq!(resolution.lineage.names(), vec!["ditto"]);
        assert!(resolution.entity.sprite_url.is_none());
    }

    #[tokio::test]
    async fn blank_query_issues_no_requests() {
        for query in ["", "   ", "\t\n"] {
            let r = resolver(sample::source());
            let err = r.resolve(query).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert!(requests(&r).await.is_empty());
        }
    }

    #[tokio::test]
    async fn unknown_name_is_not_found_without_follow_ups() {
        let r = resolver(sample::source());
        let err = r.resolve("zzzznotreal").await.unwrap_err();

        assert!(matches!(
            err,
            ResolveError::NotFound { ref name, status: 404 } if name == "zzzznotreal"
        ));
        assert_eq!(requests(&r).await, vec![format!("{BASE}/pokemon/zzzznotreal")]);
    }

    #[tokio::test]
    async fn species_failure_is_resolution_error() {
        let source = sample::source().with_status(format!("{BASE}/pokemon-species/4/"), 500);
        let err = resolver(source).resolve("charmander").await.unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Resolution {
                step: ResolveStep::Species,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn malformed_chain_is_resolution_error() {
        let source = sample::source().with_json(
            format!("{BASE}/evolution-chain/2/"),
            &serde_json::json!({ "id": 2, "chain": { "evolves_to": [] } }),
        );
        let err = resolver(source).resolve("charmander").await.unwrap_err();
        assert!(matches!(
            err,
            ResolveError::Resolution {
                step: ResolveStep::EvolutionChain,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn stage_lookup_failure_discards_everything() {
        let source = sample::source().with_unreachable(format!("{BASE}/pokemon/charizard"));
        let r = resolver(source);
        let err = r.resolve("charmander").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Resolution);
        assert!(matches!(
            err,
            ResolveError::Resolution {
                step: ResolveStep::Stage,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn entity_transport_failure_is_resolution_error() {
        let source = FixtureSource::new().with_unreachable(format!("{BASE}/pokemon/pikachu"));
        let err = resolver(source).resolve("pikachu").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolution);
    }

    #[tokio::test]
    async fn malformed_entity_is_resolution_error_naming_the_url() {
        let source = sample::source().with_json(
            format!("{BASE}/pokemon/charmander"),
            &serde_json::json!({ "name": "charmander" }),
        );
        let r = resolver(source);
        let err = r.resolve("charmander").await.unwrap_err();

        assert!(matches!(
            err,
            ResolveError::Resolution {
                step: ResolveStep::Entity,
                ref detail,
            } if detail.contains("/pokemon/charmander")
        ));
        assert_eq!(requests(&r).await, vec![format!("{BASE}/pokemon/charmander")]);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_stage_is_awaited_in_order() {
        let source = sample::source().with_delay(
            &format!("{BASE}/pokemon/charmeleon"),
            Duration::from_millis(200),
        );
        let r = resolver(source);
        let resolution = r.resolve("charmander").await.unwrap();
        assert_eq!(
            resolution.lineage.names(),
            vec!["charmander", "charmeleon", "charizard"]
        );
    }
}
