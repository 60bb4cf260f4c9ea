use morpheme_blocks::{MorphemeKind, Repository, ServerConfig};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--strict]\n\
         \n\
         Reads env vars (all optional):\n\
           HOST, PORT, SEED_DATA, LOG_FORMAT\n\
         Reports the seed dataset and word components with no stored morpheme.\n\
         --strict exits non-zero when such components exist.\n"
    );
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }
    let strict = args.iter().any(|a| a == "--strict");

    let config = ServerConfig::from_env()?;
    println!("> Preflight:");
    println!("  bind address: {}", config.bind_addr());
    println!("  SEED_DATA={}", config.seed_data);
    println!("  LOG_FORMAT={:?}", config.log_format);

    let repo = Repository::initial(config.seed_data);
    println!("  words: {}", repo.word_count());
    for kind in MorphemeKind::ALL {
        println!("  {} morphemes: {}", kind, repo.list_morphemes_by_kind(kind).len());
    }

    // Components are soft references; a missing morpheme only means the UI has no tooltip for it.
    let mut unresolved = 0usize;
    for word in repo.list_words(None) {
        let Some(breakdown) = repo.breakdown(&word.word) else {
            continue;
        };
        for part in breakdown.parts.iter().filter(|p| p.morpheme.is_none()) {
            unresolved += 1;
            println!(
                "  note: `{}` {} component `{}` has no stored morpheme",
                word.word, part.kind, part.text
            );
        }
    }

    if unresolved > 0 && strict {
        return Err(anyhow::anyhow!(
            "{} word component(s) have no stored morpheme",
            unresolved
        ));
    }

    println!("> Preflight OK.");
    Ok(())
}
