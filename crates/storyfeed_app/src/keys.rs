use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use storyfeed_core::{AppViewModel, Msg, SortMode};

use crate::app::Focus;

/// What a key press means under the current focus. Shell concerns (focus,
/// selection, quitting) stay here; everything else becomes a core message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    FocusSearch,
    FocusList,
    MoveUp,
    MoveDown,
    Quit,
    None,
}

pub fn translate(key: KeyEvent, focus: Focus, view: &AppViewModel, selected: usize) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match focus {
        Focus::Search => translate_search(key, view),
        Focus::List => translate_list(key, view, selected),
    }
}

fn translate_search(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::Dispatch(Msg::SearchSubmitted),
        KeyCode::Tab | KeyCode::Esc => KeyAction::FocusList,
        KeyCode::Backspace => {
            let mut term = view.search_input.clone();
            term.pop();
            KeyAction::Dispatch(Msg::InputChanged(term))
        }
        KeyCode::Char(ch) => {
            let mut term = view.search_input.clone();
            term.push(ch);
            KeyAction::Dispatch(Msg::InputChanged(term))
        }
        _ => KeyAction::None,
    }
}

fn translate_list(key: KeyEvent, view: &AppViewModel, selected: usize) -> KeyAction {
    match key.code {
        KeyCode::Tab | KeyCode::Char('/') => KeyAction::FocusSearch,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        // Dismiss acts on the row as currently displayed, sorted view included.
        KeyCode::Char('d') => match view.stories.get(selected) {
            Some(story) => KeyAction::Dispatch(Msg::StoryDismissed(story.clone())),
            None => KeyAction::None,
        },
        KeyCode::Char('t') => KeyAction::Dispatch(Msg::SortChanged(SortMode::Title)),
        KeyCode::Char('a') => KeyAction::Dispatch(Msg::SortChanged(SortMode::Author)),
        KeyCode::Char('c') => KeyAction::Dispatch(Msg::SortChanged(SortMode::Comments)),
        KeyCode::Char('p') => KeyAction::Dispatch(Msg::SortChanged(SortMode::Points)),
        KeyCode::Char('o') => KeyAction::Dispatch(Msg::SortChanged(SortMode::None)),
        KeyCode::Char(ch @ '1'..='5') => {
            let index = ch as usize - '1' as usize;
            match view.last_searches.get(index) {
                Some(term) => KeyAction::Dispatch(Msg::LastSearchClicked(term.clone())),
                None => KeyAction::None,
            }
        }
        _ => KeyAction::None,
    }
}
