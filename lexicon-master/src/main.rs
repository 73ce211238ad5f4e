use dictionary::Dictionary;
use lexicon_master::{
    command::{self, Input},
    config::Config,
    logging,
    notebook::{NotebookView, QuizState},
    render,
    storage::Storage,
    utilities::{input, str_to_bool},
    App, Outcome, SavedWords,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_format, &config.log_level);

    let storage = Storage::initialize(&config.database_url).await?;
    let saved = SavedWords::load(storage).await?;
    let dict = Dictionary::gemini(config.gemini)?;
    let provider = dict.metadata();
    tracing::info!(
        log_format = %config.log_format,
        provider = %provider.name,
        model = %provider.model,
        contract = provider.contract_version,
        saved = saved.len(),
        "lexicon ready"
    );

    let mut app = App::new(dict, saved);
    println!("{}", render::HELP);
    loop {
        let keep_going = if app.notebook().is_some() {
            notebook_step(&mut app).await?
        } else {
            main_step(&mut app).await?
        };
        if !keep_going {
            break;
        }
    }
    Ok(())
}

async fn main_step(app: &mut App) -> anyhow::Result<bool> {
    let Some(line) = input(">> ")? else {
        return Ok(false);
    };
    match line.trim() {
        ":q" | ":quit" => return Ok(false),
        ":h" | ":help" => {
            println!("{}", render::HELP);
            return Ok(true);
        }
        ":save" => {
            toggle_displayed_word(app).await?;
            return Ok(true);
        }
        _ => {}
    }

    let input = command::parse(&line);
    if let Input::Search(word) = &input {
        if app.begin_search(word) {
            render::print_main_view(app.view(), app.saved());
            app.finish_search().await;
            render::print_main_view(app.view(), app.saved());
        }
        return Ok(true);
    }
    match app.dispatch(input).await? {
        Outcome::Saved(word) => println!("Saved '{word}'."),
        Outcome::Searched => render::print_main_view(app.view(), app.saved()),
        Outcome::Nothing | Outcome::NotebookOpened => {}
    }
    Ok(true)
}

async fn toggle_displayed_word(app: &mut App) -> anyhow::Result<()> {
    let Some(word) = app.record().map(|record| record.word.clone()) else {
        println!("Nothing to save yet.");
        return Ok(());
    };
    if app.toggle_save(&word).await? {
        println!("Saved '{word}'.");
    } else {
        println!("Removed '{word}'.");
    }
    Ok(())
}

async fn notebook_step(app: &mut App) -> anyhow::Result<bool> {
    let view = match app.notebook() {
        Some(notebook) => notebook.view().clone(),
        None => return Ok(true),
    };
    render::print_notebook(&view, app.saved());

    match view {
        NotebookView::List => {
            let Some(line) = input("notebook>> ")? else {
                return Ok(false);
            };
            let line = line.trim();
            let (command, arg) = match line.split_once(char::is_whitespace) {
                Some((command, arg)) => (command, arg.trim()),
                None => (line, ""),
            };
            match command {
                "" => {}
                "quiz" => {
                    if !app.start_quiz() {
                        println!("Save some words before starting a quiz.");
                    }
                }
                "remove" if !arg.is_empty() => {
                    if app.saved().contains(arg) {
                        app.toggle_save(arg).await?;
                        println!("Removed '{}'.", arg.to_lowercase());
                    } else {
                        println!("'{arg}' is not saved.");
                    }
                }
                "close" | ":close" | ":q" => app.close_notebook(),
                other => println!("Unknown command {other}."),
            }
        }
        NotebookView::Quiz(QuizState::AwaitingAnswer { .. }) => {
            let Some(line) = input("Your definition (:back, :close): ")? else {
                return Ok(false);
            };
            match line.trim() {
                ":back" => app.back_to_list(),
                ":close" => app.close_notebook(),
                answer => {
                    if !answer.is_empty() {
                        println!("正在评分...");
                    }
                    app.submit_quiz_answer(answer).await;
                }
            }
        }
        NotebookView::Quiz(QuizState::Graded { .. }) => {
            let Some(line) = input("Next word? (Y/n): ")? else {
                return Ok(false);
            };
            match str_to_bool(&line) {
                Some(true) => {
                    app.next_quiz();
                }
                Some(false) => app.back_to_list(),
                None => println!("Couldn't understand your answer, please try again."),
            }
        }
    }
    Ok(true)
}
