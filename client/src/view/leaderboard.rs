use pokerview_protocol::GameSnapshot;

/// Where the viewer stands by stack size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub position: usize,
    pub total: usize,
}

/// Ranks occupied seats by stack, largest first. Equal stacks keep seat order.
/// A viewer who is not seated is reported last.
pub fn standing(snapshot: &GameSnapshot) -> Standing {
    let mut stacks: Vec<(usize, u32)> = snapshot.seats().map(|p| (p.index, p.money)).collect();
    // sort_by is stable
    stacks.sort_by(|a, b| b.1.cmp(&a.1));

    let total = stacks.len();
    let position = snapshot
        .your_index
        .and_then(|y| stacks.iter().position(|(index, _)| *index == y))
        .map(|i| i + 1)
        .unwrap_or(total);

    Standing { position, total }
}
