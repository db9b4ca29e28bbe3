//! Exhaustive enumeration of simple routes between two stations
//!
//! Depth-first search with backtracking, driven by an explicit stack so the
//! caller can pull routes one at a time. A station's visited flag is set
//! exactly when its frame is pushed and cleared exactly when that frame is
//! popped, so the visited set always equals the stations on the active path.

use std::iter::FusedIterator;

use tracing::debug;

use crate::config::RoutesConfig;
use crate::error::{MetroError, Result};
use crate::graph::GraphProvider;
use crate::network::{Fare, PathResult, StationId};

/// One station on the active path
#[derive(Debug, Clone, Copy)]
struct Frame {
    station: StationId,
    /// Fare accumulated from the source up to this station
    fare: Fare,
    /// Index of the next incident route to try
    next_route: usize,
    /// Set once this frame has been reported as a complete route
    reported: bool,
}

/// Lazy iterator over every simple route from a source to a target.
///
/// Routes come out in depth-first discovery order, following each
/// station's incidence list in registration order. They are not sorted
/// by fare.
pub struct RouteEnumerator<'a> {
    provider: &'a dyn GraphProvider,
    target: StationId,
    stack: Vec<Frame>,
    visited: Vec<bool>,
    limits: RoutesConfig,
    emitted: usize,
}

impl<'a> RouteEnumerator<'a> {
    pub fn new(
        provider: &'a dyn GraphProvider,
        source: StationId,
        target: StationId,
        limits: RoutesConfig,
    ) -> Self {
        let mut enumerator = Self {
            provider,
            target,
            stack: Vec::new(),
            visited: vec![false; provider.station_count()],
            limits,
            emitted: 0,
        };
        enumerator.enter(source, Fare::ZERO);
        enumerator
    }

    /// Number of routes produced so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn enter(&mut self, station: StationId, fare: Fare) {
        self.visited[station.index()] = true;
        self.stack.push(Frame {
            station,
            fare,
            next_route: 0,
            reported: false,
        });
    }

    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited[frame.station.index()] = false;
        }
        debug_assert_eq!(
            self.visited.iter().filter(|v| **v).count(),
            self.stack.len()
        );
    }

    fn finish(&mut self) {
        while !self.stack.is_empty() {
            self.leave();
        }
    }

    fn at_depth_limit(&self) -> bool {
        self.limits
            .max_depth
            .is_some_and(|max| self.stack.len() >= max)
    }

    fn current_route(&self, fare: Fare) -> PathResult {
        PathResult {
            stations: self
                .stack
                .iter()
                .map(|frame| self.provider.station_name(frame.station).to_string())
                .collect(),
            fare,
        }
    }
}

impl Iterator for RouteEnumerator<'_> {
    type Item = PathResult;

    fn next(&mut self) -> Option<PathResult> {
        if self
            .limits
            .max_routes
            .is_some_and(|max| self.emitted >= max)
        {
            self.finish();
            return None;
        }

        loop {
            let top = self.stack.last_mut()?;

            if top.station == self.target {
                // A route cannot pass through its own destination.
                if top.reported {
                    self.leave();
                    continue;
                }
                top.reported = true;
                let fare = top.fare;
                self.emitted += 1;
                return Some(self.current_route(fare));
            }

            let (station, fare, index) = (top.station, top.fare, top.next_route);
            top.next_route += 1;

            if self.at_depth_limit() {
                self.leave();
                continue;
            }

            match self.provider.routes_from(station).get(index).copied() {
                Some(route) if !self.visited[route.to.index()] => {
                    self.enter(route.to, fare + route.fare);
                }
                Some(_) => {}
                None => self.leave(),
            }
        }
    }
}

impl FusedIterator for RouteEnumerator<'_> {}

/// Start enumerating routes between two named stations
#[tracing::instrument(skip(provider, limits), fields(max_routes = ?limits.max_routes, max_depth = ?limits.max_depth))]
pub fn enumerate_routes<'a>(
    provider: &'a dyn GraphProvider,
    from: &str,
    to: &str,
    limits: RoutesConfig,
) -> Result<RouteEnumerator<'a>> {
    let source = provider
        .lookup(from)
        .ok_or_else(|| MetroError::station_not_found(from))?;
    let target = provider
        .lookup(to)
        .ok_or_else(|| MetroError::station_not_found(to))?;

    debug!(
        source = source.index(),
        target = target.index(),
        "enumerate_routes"
    );
    Ok(RouteEnumerator::new(provider, source, target, limits))
}

#[cfg(test)]
mod tests;
