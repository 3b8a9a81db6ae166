use std::time::Duration;

use anyhow::{Context, Result, bail};
use revolve_config::SiteConfig;
use revolve_core::{
    CarouselController, CarouselHandle, CarouselKey, CarouselState,
    OrbitLayout, PageLayout, TracingSurface, TripleLayout,
};
use tracing::info;

use crate::sample;

pub async fn run(
    config: &SiteConfig,
    keys: &[CarouselKey],
    duration_ms: u64,
) -> Result<()> {
    let mut handles = Vec::with_capacity(keys.len());
    for key in keys {
        handles.push(spawn(config, key)?);
    }

    info!(carousels = handles.len(), duration_ms, "simulation running");
    tokio::time::sleep(Duration::from_millis(duration_ms)).await;

    for handle in handles {
        let snapshot = handle.snapshot().await?;
        println!(
            "{}: position {} of {} ({:?})",
            snapshot.key,
            snapshot.current + 1,
            snapshot.positions,
            snapshot.phase
        );
        handle.shutdown().await;
    }
    Ok(())
}

fn spawn(config: &SiteConfig, key: &CarouselKey) -> Result<CarouselHandle> {
    let Some(timing) = config.carousel(key).copied() else {
        bail!("no configuration for carousel '{key}'");
    };
    let surface = TracingSurface::new(key.clone());

    let handle = match key {
        CarouselKey::Destinations => {
            let state = CarouselState::new(
                sample::DESTINATIONS.to_vec(),
                OrbitLayout::default(),
                timing,
            )
            .with_context(|| format!("failed to build {key} carousel"))?;
            CarouselController::spawn(key.clone(), state, surface)
        }
        CarouselKey::Partners => {
            let state = CarouselState::new(
                sample::PARTNERS.to_vec(),
                PageLayout::new(config.partners_page_size),
                timing,
            )
            .with_context(|| format!("failed to build {key} carousel"))?;
            CarouselController::spawn(key.clone(), state, surface)
        }
        CarouselKey::Testimonials => {
            let state = CarouselState::new(
                sample::TESTIMONIALS.to_vec(),
                TripleLayout,
                timing,
            )
            .with_context(|| format!("failed to build {key} carousel"))?;
            CarouselController::spawn(key.clone(), state, surface)
        }
        CarouselKey::Custom(_) => bail!("no sample items for carousel '{key}'"),
    };
    Ok(handle)
}
