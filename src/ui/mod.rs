// Terminal front end: drawing the board and reading moves
// No chess rules here, everything is forwarded to `Game`

pub mod input;
pub mod renderer;
