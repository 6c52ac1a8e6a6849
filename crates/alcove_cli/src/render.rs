//! Terminal rendering for the three view surfaces.

use alcove_app::AppState;
use alcove_catalog::{DEFAULT_CATEGORY_ORDER, filter_books, project, star_glyphs};
use alcove_reader::paragraphs;
use alcove_types::BookRecord;

pub fn stars(rating: f32) -> String {
    star_glyphs(rating).iter().map(ToString::to_string).collect()
}

fn book_line(book: &BookRecord) -> String {
    format!("  {} {} by {}", stars(book.rating), book.title, book.author)
}

/// The catalog surface: search results while a query is active, otherwise
/// the grouped browse view.
pub fn render_catalog(state: &AppState) {
    if !state.query.trim().is_empty() {
        let matches = filter_books(&state.catalog, &state.query);
        if matches.is_empty() {
            println!("No results found for \"{}\" 😢", state.query.trim());
            return;
        }
        println!("Results for \"{}\":", state.query.trim());
        for book in matches {
            println!("{}", book_line(book));
        }
        return;
    }

    let groups = project(&state.catalog, DEFAULT_CATEGORY_ORDER);
    if groups.is_empty() {
        println!("No books available right now. Check back soon!");
        return;
    }

    for group in groups {
        println!("📚 {}", group.name);
        for book in &group.books {
            println!("{}", book_line(book));
        }
        println!();
    }
}

/// The reader surface: current chapter with navigation hints.
pub fn render_reader(state: &AppState) {
    let Some(reader) = &state.reader else {
        return;
    };

    let chapter = reader.current_chapter();
    println!(
        "📖 {} | Chapter {}/{}: {}",
        reader.book().title,
        reader.current_index() + 1,
        reader.chapter_count(),
        chapter.title
    );
    println!("{}", "=".repeat(50));
    for paragraph in paragraphs(&chapter.content) {
        println!("{}", paragraph);
        println!();
    }

    let previous = if reader.at_start() { "(p)revious ✗" } else { "(p)revious" };
    let next = if reader.at_end() { "(n)ext ✗" } else { "(n)ext" };
    println!("{} | {} | (q)uit", previous, next);
}

/// The sign-in prompt surface.
pub fn render_prompt(state: &AppState) {
    if state.gate.prompt_visible() {
        println!("🔒 The library is locked. Sign in with: alcove account login <email>");
        return;
    }
    if let Some(session) = &state.session {
        println!("Signed in as {}", session.display_name);
    }
}
