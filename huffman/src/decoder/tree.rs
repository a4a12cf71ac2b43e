//! Builds the binary decoding tree used by [`super::decode`] from the
//! canonical code table, once, and shares it across calls.

use std::sync::OnceLock;

use crate::table::ENCODE_TABLE;

pub(super) struct Node {
    pub(super) children: [Option<usize>; 2],
    pub(super) symbol: Option<u16>,
}

fn build() -> Vec<Node> {
    let mut nodes = vec![Node {
        children: [None, None],
        symbol: None,
    }];

    for (symbol, &(bits, code)) in ENCODE_TABLE.iter().enumerate() {
        let mut cur = 0usize;
        for i in (0..bits).rev() {
            let bit = ((code >> i) & 1) as usize;
            cur = match nodes[cur].children[bit] {
                Some(next) => next,
                None => {
                    nodes.push(Node {
                        children: [None, None],
                        symbol: None,
                    });
                    let next = nodes.len() - 1;
                    nodes[cur].children[bit] = Some(next);
                    next
                }
            };
        }
        nodes[cur].symbol = Some(symbol as u16);
    }

    nodes
}

pub(super) fn tree() -> &'static [Node] {
    static TREE: OnceLock<Vec<Node>> = OnceLock::new();
    TREE.get_or_init(build)
}
