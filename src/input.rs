use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::components::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

pub fn command_for_key(code: KeyCode) -> Option<Command> {
    let dir = match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Direction::Right,
        _ => return None,
    };
    Some(Command::Move(dir))
}

/// Key presses and repeats become commands; releases and other events are dropped.
pub fn command_for_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => command_for_key(*code),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn all_layouts_map_to_directions() {
        for (code, dir) in [
            (KeyCode::Up, Direction::Up),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('j'), Direction::Down),
            (KeyCode::Char('l'), Direction::Right),
        ] {
            assert_eq!(command_for_key(code), Some(Command::Move(dir)));
        }
        assert_eq!(command_for_key(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(command_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(
            command_for_event(&Event::Key(key)),
            Some(Command::Move(Direction::Left))
        );
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_event(&Event::Key(key)), None);
    }
}
