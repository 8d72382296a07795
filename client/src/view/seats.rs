/// Rotates an absolute seat index so the viewer always lands in slot 0.
///
/// Indices outside `0..max_players` wrap around instead of failing. A table
/// with no seats maps everything to slot 0.
pub fn display_slot(absolute: usize, your_index: usize, max_players: usize) -> usize {
    if max_players == 0 {
        return 0;
    }
    let a = absolute % max_players;
    let y = your_index % max_players;
    (a + max_players - y) % max_players
}
