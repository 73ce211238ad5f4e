use dictionary::{QuizOutcome, WordRecord};

use crate::app::MainView;
use crate::notebook::{NotebookView, QuizState};
use crate::saved_words::SavedWords;

pub const HELP: &str = "\
Type a word to explore its etymology.
Commands: /add [word], /list, /test
          :save toggles the word on display, :q quits";

pub fn print_main_view(view: &MainView, saved: &SavedWords) {
    match view {
        MainView::Idle => println!("请输入单词开始"),
        MainView::Loading { word } => println!("正在检索 '{word}'..."),
        MainView::Error(message) => println!("{message}"),
        MainView::Loaded(record) => print_word_card(record, saved.contains(&record.word)),
    }
}

pub fn print_word_card(record: &WordRecord, is_saved: bool) {
    let marker = if is_saved { " [saved]" } else { "" };
    println!("{}{marker}", record.word);
    println!(
        "    {}  {}",
        record.phonetics.ipa, record.phonetics.syllables
    );
    println!("    tip: {}", record.phonetics.tip);

    println!("  Etymology:");
    println!("    {}", record.etymology.root_analysis);
    println!("    {}", record.etymology.story);

    if !record.cognates.is_empty() {
        println!("  Cognates:");
        for cognate in &record.cognates {
            println!("    {}: {}", cognate.word, cognate.connection);
        }
    }

    let usage = &record.usage;
    if !usage.synonyms.is_empty() {
        println!("  Synonyms:");
        for synonym in &usage.synonyms {
            println!("    {}: {}", synonym.word, synonym.context);
        }
    }
    if !usage.antonyms.is_empty() {
        println!(
            "  Antonyms: {}",
            record.all_antonyms().collect::<Vec<&str>>().join(", ")
        );
    }

    let literature = &usage.examples.literature;
    println!("  Literature:");
    println!("    \"{}\"", literature.quote);
    println!("      - {}, {}", literature.author, literature.source);
    let modern = &usage.examples.modern;
    println!("  Modern:");
    println!("    \"{}\"", modern.quote);
    println!("      - {}", modern.source);
}

pub fn print_notebook(view: &NotebookView, saved: &SavedWords) {
    match view {
        NotebookView::List => print_word_list(saved),
        NotebookView::Quiz(quiz) => print_quiz(quiz),
    }
}

fn print_word_list(saved: &SavedWords) {
    println!("Notebook ({} words)", saved.len());
    if saved.is_empty() {
        println!("    暂无生词. Save words with /add or :save.");
        return;
    }
    for (index, word) in saved.words().iter().enumerate() {
        println!("  [{}] {word}", index + 1);
    }
    println!("Commands: quiz, remove <word>, close");
}

fn print_quiz(quiz: &QuizState) {
    match quiz {
        QuizState::AwaitingAnswer { word, error } => {
            println!("What does '{word}' mean?");
            if let Some(error) = error {
                println!("    {error}");
            }
        }
        QuizState::Graded {
            word,
            answer,
            outcome,
        } => {
            println!("'{word}' - your answer: {answer}");
            print_quiz_outcome(outcome);
        }
    }
}

pub fn print_quiz_outcome(outcome: &QuizOutcome) {
    if outcome.is_correct {
        println!("Correct. Well done!");
    } else {
        println!("Not quite.");
    }
    println!("    {}", outcome.feedback);
    println!("    {}", outcome.etymology_note);
}
