//! Built-in arena layout.
//!
//! 27 rows x 30 columns. Tall walls ring the arena, a block of short walls in
//! the middle can be climbed, and nine spawn points are spread around the edges.

/// Default arena used when a config does not supply its own layout.
pub const DEFAULT_ARENA_LAYOUT: &str = concat!(
    "   XXXXXXXX     XXXXXXXX      \n",
    "   X      X     X      X      \n",
    "   X  S   X     X   S  X      \n",
    "   X      XXXXXXX      X      \n",
    "   X                  XXXXXXXX\n",
    "   X         S               X\n",
    "   XXXX XX       XXXX    S   X\n",
    "      X XX       X  X        X\n",
    "   XXXX XXX     XX  X        X\n",
    "   X      XX   XXXXXXTTXX  XXX\n",
    "   X      XTTTTTXXXTTTTXX  X  \n",
    "   XX  S  XTTTTTXXTTTTTXX  XXX\n",
    "XXXXX     XTTTTTXTTTTTTX     X\n",
    "X      XTTXTTTTTTTTTTTTX     X\n",
    "X  S  XXTTTTTTTTXTTTTTXX  S  X\n",
    "X     XTTTTTTTTTXTTTTTX      X\n",
    "X     TTTTTTTTTTXXXXTTX  XXXXX\n",
    "X     XTTTTTTTTTX X      X    \n",
    "XX  XXXTTTTTTTTTX X      X    \n",
    " X  X XTTTTTTTTTX X      X    \n",
    " X  XXX         X X      X    \n",
    " X             XXXX      XX   \n",
    " XXXXX    T               X   \n",
    "     X                 S  X   \n",
    "     XX   S  XXXXXXXX     X   \n",
    "      XX    XX      XXXXXXX   \n",
    "       XXXXXX                 ",
);
