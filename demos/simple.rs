use std::error::Error;

use humanid::{Behaviour, DA, DE, Normalizer, Options, RU, UK};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // ────────────────────────────────────────────────────────────────
    // Defaults: transliterate, lowercase, hyphenate
    // ────────────────────────────────────────────────────────────────
    println!(
        "Default : {}",
        humanid::normalize("Пушкин, Александр Сергеевич", Options::new())?
    );
    // → pushkin-aleksandr-sergeevich

    println!(
        "Raw     : {}",
        humanid::normalize(
            "Пушкин, Александр Сергеевич",
            Options::new().normalize(false).downcase(false)
        )?
    );
    // → Pushkin, Aleksandr Sergeevich

    // ────────────────────────────────────────────────────────────────
    // Locale-aware normalizers
    // ────────────────────────────────────────────────────────────────
    for (locale, text) in [
        (DE, "Grüße aus München"),
        (DA, "Århus Ærø"),
        (RU, "Сергей Королёв"),
        (UK, "Київ, Україна"),
    ] {
        let n = Normalizer::builder().locale(locale).build();
        println!("{:<7} : {}", locale.code(), n.perform(text, Options::new())?);
    }
    // → DE : gruesse-aus-muenchen
    // → DA : aarhus-aeroe
    // → RU : sergei-korolev
    // → UK : kyiv-ukraina

    // ────────────────────────────────────────────────────────────────
    // Parts, custom separator, validation
    // ────────────────────────────────────────────────────────────────
    let mut behaviour = Behaviour::default();
    behaviour
        .set_separator('_')
        .set_validation_regex(Behaviour::validation_regex_for('_')?);
    let snake = Normalizer::new(behaviour);
    let id = snake.perform(["Лев", "Толстой"], Options::new())?;
    snake.validate(&id)?;
    println!("Parts   : {id}");
    // → lev_tolstoi

    for candidate in ["abc-123", "-abc", "bad id!"] {
        println!("valid?  : {candidate:?} → {}", humanid::is_valid(candidate));
    }

    Ok(())
}
