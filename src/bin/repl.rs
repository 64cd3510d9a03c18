// src/bin/repl.rs
//
// Calculatrice mixte — mode terminal
// ----------------------------------
// Boucle lecture/évaluation/affichage : invite "? ", historique en mémoire.
// Toute la logique (exit/help/pré-contrôles/noyau) vit dans `Session`.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> rustyline::Result<()> {
    use clap::Parser;

    let args = Args::parse();

    let niveau = if args.verbeux {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(niveau)
        .with_writer(std::io::stderr)
        .try_init();

    terminal::run(!args.sans_aide)
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Calculatrice de fractions mixtes (ex: 1/2 * 3_3/4).
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "repl", version)]
struct Args {
    /// Ne pas afficher l’aide au démarrage.
    #[arg(long)]
    sans_aide: bool,

    /// Journalise chaque réduction sur stderr.
    #[arg(short, long)]
    verbeux: bool,
}

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use calculatrice_mixte::session::{Reponse, Session, AIDE, AU_REVOIR};
    use rustyline::error::ReadlineError;

    const INVITE: &str = "? ";
    const TAILLE_HISTORIQUE: usize = 100;

    pub fn run(afficher_aide: bool) -> rustyline::Result<()> {
        let config = rustyline::Config::builder()
            .max_history_size(TAILLE_HISTORIQUE)?
            .auto_add_history(true)
            .build();
        let mut rl = rustyline::DefaultEditor::with_config(config)?;

        if afficher_aide {
            println!("{AIDE}");
        }

        let mut session = Session::new();

        while session.active() {
            match rl.readline(INVITE) {
                Ok(ligne) => match session.traiter(&ligne) {
                    Reponse::Vide => {}
                    Reponse::Aide(texte) => println!("{texte}"),
                    Reponse::AuRevoir => println!("{AU_REVOIR}"),
                    Reponse::Resultat { texte, .. } => println!("{texte}"),
                    Reponse::Erreur(message) => println!("{message}"),
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                    println!("{AU_REVOIR}");
                    break;
                }
                Err(err) => {
                    println!("Error: {err:?}");
                    break;
                }
            }
        }

        Ok(())
    }
}
