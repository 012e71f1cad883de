use std::{cmp::Reverse, collections::BinaryHeap};

use hashbrown::HashSet;
use smallvec::SmallVec;

use super::node::NodeGrid;
use crate::array::Array2D;
use crate::core::*;

const INFINITY: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Nodes from start to end, both included
    Found(Vec<Dims>),
    NotFound,
}

impl PathResult {
    pub fn path(&self) -> Option<&[Dims]> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Continue,
    Found,
    NotFound,
}

/// One A* run over a [`NodeGrid`], driven step by step with [`AStar::advance`] or
/// all at once with [`AStar::finish`].
///
/// The run holds the grid mutably, so the wall layout can't change under it, and it
/// refreshes every adjacency list before the first step.
pub struct AStar<'a> {
    grid: &'a mut NodeGrid,
    start: Dims,
    end: Dims,
    g_score: Array2D<usize>,
    f_score: Array2D<usize>,
    came_from: Array2D<Option<Dims>>,
    /// `(f_score, insertion_index, node)`, the index keeps equal scores in FIFO order
    frontier: BinaryHeap<Reverse<(usize, usize, Dims)>>,
    in_frontier: HashSet<Dims>,
    counter: usize,
    expanded: usize,
    status: SearchStatus,
    path: Vec<Dims>,
}

impl<'a> AStar<'a> {
    pub fn new(grid: &'a mut NodeGrid, start: Dims, end: Dims) -> Result<Self, Error> {
        for pos in [start, end] {
            match grid.node(pos) {
                None => return Err(Error::OutOfBounds(pos)),
                Some(node) if node.is_wall() => return Err(Error::NodeIsWall(pos)),
                Some(_) => {}
            }
        }

        grid.clear_search();
        grid.update_neighbors();

        let (rows, columns) = (grid.nodes().rows(), grid.nodes().columns());
        let mut g_score = Array2D::new(INFINITY, rows, columns);
        let mut f_score = Array2D::new(INFINITY, rows, columns);
        g_score[start] = 0;
        f_score[start] = start.manhattan(end);

        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((f_score[start], 0, start)));

        log::debug!("Searching path from {} to {}", start, end);

        Ok(Self {
            grid,
            start,
            end,
            g_score,
            f_score,
            came_from: Array2D::new(None, rows, columns),
            frontier,
            in_frontier: HashSet::from_iter([start]),
            counter: 0,
            expanded: 0,
            status: SearchStatus::Continue,
            path: Vec::new(),
        })
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of nodes expanded so far
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    pub fn path(&self) -> Option<&[Dims]> {
        (self.status == SearchStatus::Found).then_some(self.path.as_slice())
    }

    pub fn grid(&self) -> &NodeGrid {
        self.grid
    }

    /// Expands the best frontier node. Once the search is over, keeps returning the
    /// final status.
    pub fn advance(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Continue {
            return self.status;
        }

        let Some(Reverse((f, _, current))) = self.frontier.pop() else {
            log::debug!(
                "No path from {} to {}, {} nodes expanded",
                self.start,
                self.end,
                self.expanded
            );
            self.status = SearchStatus::NotFound;
            return self.status;
        };

        // an improved score re-queues the node, older entries are skipped
        if f != self.f_score[current] || !self.in_frontier.remove(&current) {
            return SearchStatus::Continue;
        }

        if current == self.end {
            self.reconstruct_path();
            self.status = SearchStatus::Found;
            return self.status;
        }

        let neighbors = self
            .grid
            .node(current)
            .map(|node| SmallVec::<[Dims; 4]>::from_slice(node.neighbors()))
            .unwrap_or_default();
        let tentative = self.g_score[current] + 1;

        for neighbor in neighbors {
            if tentative >= self.g_score[neighbor] {
                continue;
            }

            self.came_from[neighbor] = Some(current);
            self.g_score[neighbor] = tentative;
            self.f_score[neighbor] = tentative + neighbor.manhattan(self.end);

            self.counter += 1;
            self.frontier
                .push(Reverse((self.f_score[neighbor], self.counter, neighbor)));
            if self.in_frontier.insert(neighbor) {
                if let Some(node) = self.grid.node_mut(neighbor) {
                    node.make_open();
                }
            }
        }

        if let Some(node) = self.grid.node_mut(current) {
            node.make_closed();
        }
        self.expanded += 1;

        SearchStatus::Continue
    }

    /// Runs the remaining steps
    pub fn finish(mut self) -> PathResult {
        loop {
            match self.advance() {
                SearchStatus::Continue => continue,
                SearchStatus::Found => return PathResult::Found(self.path),
                SearchStatus::NotFound => return PathResult::NotFound,
            }
        }
    }

    fn reconstruct_path(&mut self) {
        let mut path = vec![self.end];
        let mut current = self.end;
        while let Some(previous) = self.came_from[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        for &pos in &path {
            if let Some(node) = self.grid.node_mut(pos) {
                node.make_path();
            }
        }

        log::debug!(
            "Found path of {} nodes after {} expansions",
            path.len(),
            self.expanded
        );
        self.path = path;
    }
}

/// Shortest path between `start` and `end`, unreachable targets give [`PathResult::NotFound`]
pub fn find_path(grid: &mut NodeGrid, start: Dims, end: Dims) -> Result<PathResult, Error> {
    Ok(AStar::new(grid, start, end)?.finish())
}
