// src/main.rs
//
// Calculatrice ligne — point d’entrée terminal
// --------------------------------------------
// But:
// - initialiser le journal (env_logger : RUST_LOG=debug trace le pipeline,
//   sur stderr, jamais sur la sortie protocole)
// - lancer la boucle de session (invite "> ", une ligne de sortie par cycle)
//
// Toute la logique vit dans noyau/ (moteur) et app/ (session + terminal).

mod app;
mod noyau;

fn main() -> rustyline::Result<()> {
    env_logger::init();

    app::boucle::lancer()
}
