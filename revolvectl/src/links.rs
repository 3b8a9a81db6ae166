use anyhow::{Context, Result};
use revolve_site::links::{section_permalink, social_url, whatsapp_url};
use tracing::debug;

pub fn whatsapp(phone: &str, message: &str) -> Result<()> {
    println!("{}", whatsapp_url(phone, message));
    Ok(())
}

pub fn social(platform: &str) -> Result<()> {
    let url = social_url(platform);
    if url == revolve_site::links::PLACEHOLDER_LINK {
        debug!(platform, "unknown social platform");
    }
    println!("{url}");
    Ok(())
}

pub fn permalink(page_url: &str, id: &str) -> Result<()> {
    let link = section_permalink(page_url, id)
        .with_context(|| format!("cannot link into '{page_url}'"))?;
    println!("{link}");
    Ok(())
}
