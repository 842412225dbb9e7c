//! Plain-text rendering of the selected fragment, used by `--print`.

use super::character_list::{gender_line, status_line};
use super::chrome::TITLE;
use super::helpers::initial;
use super::states::{select_fragment, Fragment, EMPTY_TEXT, LOADING_TEXT};
use crate::state::ScreenState;

pub fn render_plain(state: &ScreenState) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\n");

    match select_fragment(state) {
        Fragment::LoadingIndicator => push_line(&mut out, LOADING_TEXT),
        Fragment::ErrorMessage(message) => push_line(&mut out, message),
        Fragment::EmptyMessage => push_line(&mut out, EMPTY_TEXT),
        Fragment::CharacterList(characters) => {
            for character in characters {
                push_line(
                    &mut out,
                    &format!("[{}] {}", initial(character.avatar_alt()), character.name),
                );
                push_line(&mut out, &format!("    {}", gender_line(character)));
                push_line(&mut out, &format!("    {}", status_line(character)));
            }
        }
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
