//! End-to-end demo: extract skills from a sample resume and score it
//! against a bundled role.
//!
//! Run with: `cargo run -p skillgap --example analyze`

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillgap::{ReportAssembler, SkillExtractor};

const SAMPLE_RESUME: &str = "
    Backend engineer, 6 years. Python services with Django and FastAPI,
    Python tooling, Python data jobs. PostgreSQL and SQL schema design,
    Redis caching. Docker in CI/CD, deployed on AWS. Git everywhere.
";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let taxonomy = skillgap::taxonomy::shared::shared()?;
    info!(
        roles = taxonomy.role_count(),
        skills = taxonomy.skill_count(),
        "taxonomy ready"
    );

    let extractor = SkillExtractor::new(taxonomy.clone())?;
    let skills = extractor.extract(SAMPLE_RESUME)?;
    info!(detected = skills.len(), "extraction done");

    let assembler = ReportAssembler::new(taxonomy);
    let response = assembler.assemble(&skills, "Backend Developer")?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
