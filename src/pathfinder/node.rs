use smallvec::SmallVec;

use crate::array::Array2D;
use crate::core::*;
use crate::grid::PassabilityMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeState {
    #[default]
    Empty,
    Wall,
    Open,
    Closed,
    Start,
    End,
    Path,
}

impl NodeState {
    pub fn glyph(&self) -> char {
        match self {
            NodeState::Empty => ' ',
            NodeState::Wall => '#',
            NodeState::Open => '+',
            NodeState::Closed => '.',
            NodeState::Start => 'S',
            NodeState::End => 'E',
            NodeState::Path => '*',
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pos: Dims,
    state: NodeState,
    neighbors: SmallVec<[Dims; 4]>,
}

impl Node {
    pub fn new(pos: Dims, state: NodeState) -> Self {
        Self {
            pos,
            state,
            neighbors: SmallVec::new(),
        }
    }

    pub fn pos(&self) -> Dims {
        self.pos
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Passable orthogonal neighbors as of the last [`NodeGrid::update_neighbors`]
    pub fn neighbors(&self) -> &[Dims] {
        &self.neighbors
    }

    pub fn is_wall(&self) -> bool {
        self.state == NodeState::Wall
    }

    pub fn is_open(&self) -> bool {
        self.state == NodeState::Open
    }

    pub fn is_closed(&self) -> bool {
        self.state == NodeState::Closed
    }

    pub fn is_start(&self) -> bool {
        self.state == NodeState::Start
    }

    pub fn is_end(&self) -> bool {
        self.state == NodeState::End
    }

    pub fn is_path(&self) -> bool {
        self.state == NodeState::Path
    }

    fn is_fixed(&self) -> bool {
        self.is_wall() || self.is_start() || self.is_end()
    }

    pub(crate) fn make_empty(&mut self) {
        self.state = NodeState::Empty;
    }

    pub(crate) fn make_open(&mut self) {
        if !self.is_fixed() {
            self.state = NodeState::Open;
        }
    }

    pub(crate) fn make_closed(&mut self) {
        if !self.is_fixed() {
            self.state = NodeState::Closed;
        }
    }

    pub(crate) fn make_path(&mut self) {
        if !self.is_fixed() {
            self.state = NodeState::Path;
        }
    }
}

/// Addressable search nodes over a [`PassabilityMatrix`], with the start, end and
/// user placed walls layered on top.
#[derive(Debug, Clone)]
pub struct NodeGrid {
    nodes: Array2D<Node>,
    layout: PassabilityMatrix,
    start: Option<Dims>,
    end: Option<Dims>,
}

impl NodeGrid {
    pub fn new(layout: PassabilityMatrix) -> Self {
        let nodes = Self::build_nodes(&layout);

        Self {
            nodes,
            layout,
            start: None,
            end: None,
        }
    }

    fn build_nodes(layout: &PassabilityMatrix) -> Array2D<Node> {
        Array2D::from_fn(layout.rows(), layout.columns(), |pos| {
            let state = if layout.is_wall(pos) {
                NodeState::Wall
            } else {
                NodeState::Empty
            };
            Node::new(pos, state)
        })
    }

    pub fn size(&self) -> Dims {
        self.nodes.size()
    }

    pub fn node(&self, pos: Dims) -> Option<&Node> {
        self.nodes.get(pos)
    }

    pub(crate) fn node_mut(&mut self, pos: Dims) -> Option<&mut Node> {
        self.nodes.get_mut(pos)
    }

    pub fn nodes(&self) -> &Array2D<Node> {
        &self.nodes
    }

    pub fn start(&self) -> Option<Dims> {
        self.start
    }

    pub fn end(&self) -> Option<Dims> {
        self.end
    }

    pub fn is_wall(&self, pos: Dims) -> bool {
        self.node(pos).map_or(true, Node::is_wall)
    }

    fn checked(&self, pos: Dims) -> Result<&Node, Error> {
        self.node(pos).ok_or(Error::OutOfBounds(pos))
    }

    /// Unsets start or end if they sit on `pos`
    fn release(&mut self, pos: Dims) {
        if self.start == Some(pos) {
            self.start = None;
        }
        if self.end == Some(pos) {
            self.end = None;
        }
    }

    pub fn set_start(&mut self, pos: Dims) -> Result<(), Error> {
        if self.checked(pos)?.is_wall() {
            return Err(Error::NodeIsWall(pos));
        }

        if let Some(old) = self.start.take() {
            self.nodes[old].make_empty();
        }
        self.release(pos);
        self.nodes[pos].state = NodeState::Start;
        self.start = Some(pos);

        Ok(())
    }

    pub fn set_end(&mut self, pos: Dims) -> Result<(), Error> {
        if self.checked(pos)?.is_wall() {
            return Err(Error::NodeIsWall(pos));
        }

        if let Some(old) = self.end.take() {
            self.nodes[old].make_empty();
        }
        self.release(pos);
        self.nodes[pos].state = NodeState::End;
        self.end = Some(pos);

        Ok(())
    }

    pub fn set_wall(&mut self, pos: Dims) -> Result<(), Error> {
        let node = self.checked(pos)?;
        if node.is_start() || node.is_end() {
            return Err(Error::NodeOccupied(pos));
        }

        self.nodes[pos].state = NodeState::Wall;
        Ok(())
    }

    /// Makes `pos` empty again, whatever it held
    pub fn clear(&mut self, pos: Dims) -> Result<(), Error> {
        self.checked(pos)?;

        self.release(pos);
        self.nodes[pos].make_empty();
        Ok(())
    }

    /// Back to the layout the grid was built from
    pub fn reset(&mut self) {
        self.nodes = Self::build_nodes(&self.layout);
        self.start = None;
        self.end = None;
    }

    /// Forgets the marks left by a previous search
    pub fn clear_search(&mut self) {
        for node in self.nodes.iter_mut() {
            if node.is_open() || node.is_closed() || node.is_path() {
                node.make_empty();
            }
        }
    }

    pub fn update_neighbors(&mut self) {
        for idx in 0..self.nodes.len() {
            let Some(pos) = self.nodes.idx_to_dim(idx) else {
                continue;
            };
            let neighbors = self.passable_neighbors(pos);
            self.nodes[pos].neighbors = neighbors;
        }
    }

    fn passable_neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        // down, up, right, left
        [Dims(1, 0), Dims(-1, 0), Dims(0, 1), Dims(0, -1)]
            .into_iter()
            .map(|off| pos + off)
            .filter(|&neighbor| self.node(neighbor).is_some_and(|n| !n.is_wall()))
            .collect()
    }

    /// Runs A* between the placed start and end
    pub fn solve(&mut self) -> Result<super::PathResult, Error> {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(Error::MissingEndpoint);
        };

        super::find_path(self, start, end)
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.nodes.len() + self.nodes.rows());
        for x in 0..self.nodes.rows() {
            if let Some(row) = self.nodes.row(x) {
                out.extend(row.iter().map(|node| node.state.glyph()));
            }
            out.push('\n');
        }
        out
    }
}
