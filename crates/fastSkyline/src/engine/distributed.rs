//! Distributed filter pass over message-passing ranks.
//!
//! ## Purpose
//!
//! This module provides the distributed filter pass that is injected into
//! the `skyline` crate's execution engine. The candidate domain `[0, N)` is
//! split into P contiguous blocks, one per rank. Ranks share nothing: they
//! exchange data only through the two collectives below.
//!
//! ## Design notes
//!
//! * **Ranks**: P ranks, each on its own named OS thread (`skyline-rank-{r}`),
//!   scoped to the pass. Rank 0 is the root and owns the input.
//! * **Transport**: `std::sync::mpsc` channels in a star topology. The root
//!   holds one sender and one receiver per peer, so a peer that dies is seen
//!   as a disconnected channel instead of a silent hang.
//! * **Failure**: Any collective that cannot complete aborts the whole pass
//!   with [`SkylineError::CollectiveFailure`]. No partial result is returned.
//!
//! ## Key concepts
//!
//! 1. **Broadcast**: The root sends every peer its own copy of the point
//!    set, followed by a barrier (all peers acknowledge, the root releases).
//! 2. **Local scan**: Each rank runs the unshrinking block scan over its
//!    candidate block against all N points.
//! 3. **Reduce**: Peers send their local membership vectors to the root,
//!    which combines all P vectors with logical AND.
//!
//! ## Invariants
//!
//! * Only the root obtains the reduced membership vector.
//! * Exactly two collectives are performed per pass.
//! * The reduced membership equals the sequential kernel's.
//!
//! ## Non-goals
//!
//! * This module does not spawn separate processes or talk over a network.
//! * This module does not retry failed collectives.

// External dependencies
use log::debug;
use num_traits::Float;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

// Export dependencies from skyline crate
use skyline::internals::algorithms::filter::filter_block_unshrinking;
use skyline::internals::engine::validator::Validator;
use skyline::internals::evaluation::aggregate::ResultAggregator;
use skyline::internals::primitives::errors::{ErrorKind, SkylineError};
use skyline::internals::primitives::membership::MembershipVector;
use skyline::internals::primitives::partition::Partition;
use skyline::internals::primitives::points::PointSet;

const BROADCAST: &str = "broadcast";
const BARRIER: &str = "barrier";
const REDUCE: &str = "reduce";

// ============================================================================
// Messages
// ============================================================================

/// Message exchanged between the root and a peer.
#[derive(Debug)]
pub enum Packet<T> {
    /// Full copy of the input, root to peer.
    Points(PointSet<T>),

    /// Peer has received its data and waits at the barrier.
    Ack {
        /// Rank of the sender.
        rank: usize,
    },

    /// Root releases the barrier.
    Go,

    /// Local membership vector, peer to root.
    Membership {
        /// Rank of the sender.
        rank: usize,
        /// Local membership flags.
        flags: MembershipVector,
    },
}

fn disconnected(operation: &'static str, rank: usize, peer: usize) -> SkylineError {
    SkylineError::collective(operation, rank, format!("rank {peer} disconnected"))
}

fn unexpected<T>(operation: &'static str, rank: usize, packet: &Packet<T>) -> SkylineError {
    let what = match packet {
        Packet::Points(_) => "point set",
        Packet::Ack { .. } => "barrier acknowledgement",
        Packet::Go => "barrier release",
        Packet::Membership { .. } => "membership vector",
    };
    SkylineError::collective(operation, rank, format!("unexpected {what}"))
}

// ============================================================================
// World
// ============================================================================

/// Communication endpoints of a group of P ranks.
pub struct World;

impl World {
    /// Wire up `size` ranks: the root endpoint and one endpoint per peer (ranks `1..size`).
    pub fn create<T>(size: usize) -> Result<(Root<T>, Vec<Peer<T>>), SkylineError> {
        Validator::validate_workers(size)?;

        let mut to_peers = Vec::with_capacity(size - 1);
        let mut from_peers = Vec::with_capacity(size - 1);
        let mut peers = Vec::with_capacity(size - 1);

        for rank in 1..size {
            let (down_tx, down_rx) = channel();
            let (up_tx, up_rx) = channel();
            to_peers.push(down_tx);
            from_peers.push(up_rx);
            peers.push(Peer {
                rank,
                size,
                to_root: up_tx,
                from_root: down_rx,
            });
        }

        let root = Root {
            size,
            to_peers,
            from_peers,
        };
        Ok((root, peers))
    }
}

// ============================================================================
// Root Endpoint
// ============================================================================

/// Endpoint of rank 0.
#[derive(Debug)]
pub struct Root<T> {
    size: usize,
    to_peers: Vec<Sender<Packet<T>>>,
    from_peers: Vec<Receiver<Packet<T>>>,
}

impl<T: Float> Root<T> {
    /// Number of ranks in the group.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Send every peer its own copy of `points`, then wait at the barrier.
    pub fn broadcast(&self, points: &PointSet<T>) -> Result<(), SkylineError> {
        for (peer, tx) in (1..).zip(&self.to_peers) {
            tx.send(Packet::Points(points.clone()))
                .map_err(|_| disconnected(BROADCAST, 0, peer))?;
        }
        self.barrier()
    }

    /// Wait until every peer has acknowledged, then release them all.
    pub fn barrier(&self) -> Result<(), SkylineError> {
        for (peer, rx) in (1..).zip(&self.from_peers) {
            match rx.recv() {
                Ok(Packet::Ack { rank }) if rank == peer => {}
                Ok(packet) => return Err(unexpected(BARRIER, 0, &packet)),
                Err(_) => return Err(disconnected(BARRIER, 0, peer)),
            }
        }
        for (peer, tx) in (1..).zip(&self.to_peers) {
            tx.send(Packet::Go)
                .map_err(|_| disconnected(BARRIER, 0, peer))?;
        }
        Ok(())
    }

    /// Gather every peer's local vector and AND them with `local`.
    pub fn reduce_and(&self, local: MembershipVector) -> Result<MembershipVector, SkylineError> {
        let n = local.len();
        let mut locals = Vec::with_capacity(self.size);
        locals.push(local);

        for (peer, rx) in (1..).zip(&self.from_peers) {
            match rx.recv() {
                Ok(Packet::Membership { rank, flags }) if rank == peer => locals.push(flags),
                Ok(packet) => return Err(unexpected(REDUCE, 0, &packet)),
                Err(_) => return Err(disconnected(REDUCE, 0, peer)),
            }
        }

        ResultAggregator::reduce_and(n, locals).map_err(|e| match e.kind() {
            ErrorKind::Collective => SkylineError::collective(REDUCE, 0, e.to_string()),
            _ => e,
        })
    }
}

// ============================================================================
// Peer Endpoint
// ============================================================================

/// Endpoint of a non-root rank.
#[derive(Debug)]
pub struct Peer<T> {
    rank: usize,
    size: usize,
    to_root: Sender<Packet<T>>,
    from_root: Receiver<Packet<T>>,
}

impl<T: Float> Peer<T> {
    /// Rank of this endpoint.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Number of ranks in the group.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Receive the broadcast point set, then wait at the barrier.
    pub fn receive_broadcast(&self) -> Result<PointSet<T>, SkylineError> {
        let points = match self.from_root.recv() {
            Ok(Packet::Points(points)) => points,
            Ok(packet) => return Err(unexpected(BROADCAST, self.rank, &packet)),
            Err(_) => return Err(disconnected(BROADCAST, self.rank, 0)),
        };
        self.barrier()?;
        Ok(points)
    }

    /// Acknowledge to the root and wait for its release.
    pub fn barrier(&self) -> Result<(), SkylineError> {
        self.to_root
            .send(Packet::Ack { rank: self.rank })
            .map_err(|_| disconnected(BARRIER, self.rank, 0))?;
        match self.from_root.recv() {
            Ok(Packet::Go) => Ok(()),
            Ok(packet) => Err(unexpected(BARRIER, self.rank, &packet)),
            Err(_) => Err(disconnected(BARRIER, self.rank, 0)),
        }
    }

    /// Send the local membership vector to the root.
    pub fn send_membership(&self, flags: MembershipVector) -> Result<(), SkylineError> {
        self.to_root
            .send(Packet::Membership {
                rank: self.rank,
                flags,
            })
            .map_err(|_| disconnected(REDUCE, self.rank, 0))
    }
}

// ============================================================================
// Rank Programs
// ============================================================================

fn run_root<T: Float>(
    root: Root<T>,
    points: &PointSet<T>,
) -> Result<(MembershipVector, usize), SkylineError> {
    root.broadcast(points)?;
    debug!("rank 0: broadcast complete to {} ranks", root.size());

    let block = Partition::for_rank(points.len(), root.size(), 0)?;
    let local = filter_block_unshrinking(points, block)?;

    let reduced = root.reduce_and(local)?;
    let survivors = reduced.count();
    debug!("rank 0: reduced {} vectors, {survivors} survivors", root.size());

    Ok((reduced, survivors))
}

fn run_peer<T: Float>(peer: Peer<T>) -> Result<(), SkylineError> {
    let points = peer.receive_broadcast()?;

    let block = Partition::for_rank(points.len(), peer.size(), peer.rank())?;
    debug!("rank {}: scanning candidates {:?}", peer.rank(), block);
    let local = filter_block_unshrinking(&points, block)?;

    peer.send_membership(local)
}

// ============================================================================
// Distributed Filter Pass
// ============================================================================

/// Compute the skyline across `workers` message-passing ranks.
///
/// Returns the reduced membership vector and the number of surviving points.
pub fn filter_pass_distributed<T>(
    points: &PointSet<T>,
    workers: usize,
) -> Result<(MembershipVector, usize), SkylineError>
where
    T: Float + Send,
{
    let (root, peers) = World::create::<T>(workers)?;

    debug!(
        "distributed pass: {} points x {} dims across {workers} ranks",
        points.len(),
        points.dims()
    );

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(peers.len());
        for peer in peers {
            let rank = peer.rank();
            let handle = thread::Builder::new()
                .name(format!("skyline-rank-{rank}"))
                .spawn_scoped(scope, move || run_peer(peer))
                .map_err(|e| SkylineError::WorkerPool(e.to_string()))?;
            handles.push((rank, handle));
        }

        // The root endpoint is dropped on return, which unblocks any waiting peer.
        let outcome = run_root(root, points);

        let mut panicked = None;
        let mut peer_errors = Vec::new();
        for (rank, handle) in handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => peer_errors.push(e),
                Err(_) => {
                    panicked.get_or_insert(rank);
                }
            }
        }

        if let Some(rank) = panicked {
            return Err(SkylineError::collective(
                "join",
                rank,
                format!("rank {rank} panicked"),
            ));
        }
        if let Some(cause) = peer_errors
            .iter()
            .find(|e| e.kind() != ErrorKind::Collective)
        {
            return Err(cause.clone());
        }
        match (outcome, peer_errors.into_iter().next()) {
            (Err(e), _) => Err(e),
            (Ok(_), Some(e)) => Err(e),
            (Ok(result), None) => Ok(result),
        }
    })
}
