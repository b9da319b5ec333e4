use anyhow::Result;
use owo_colors::OwoColorize;
use rota_core::rota::Rota;

pub fn run() -> Result<()> {
    let rota = Rota::load()?;

    for user in rota.users() {
        let id = format!("{:<10}", user.id);
        println!("  {} {}", id.bold(), user.name.dimmed());
    }

    Ok(())
}
