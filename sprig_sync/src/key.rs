// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic node keys, node kinds, sockets, and links of the generated graph.

use core::fmt;
use core::str::FromStr;

/// Name of a generated node.
///
/// Every node the synchronizer emits is addressed by a key derived from the
/// model: fixed nodes have fixed names, and per-tube and per-node structure is
/// named after the tube and node indices. Existence checks are then plain key
/// lookups on the target graph, with no side table to keep in step.
///
/// The [`Display`](fmt::Display) form is the node name used in the target
/// graph (`Tube_2`, `Transform_2_0`, `Join_2_1`, `Hull_2_1`, ...), and
/// [`FromStr`] parses it back.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    /// The group output.
    Output,
    /// The shared sphere generator feeding every transform.
    Sphere,
    /// The global join collecting every tube.
    Join,
    /// Mirrored copy of the global join, present while symmetry is on.
    Symmetry,
    /// Join of the global join and its mirrored copy.
    Join2,
    /// Mirror modifier settings.
    Mirror,
    /// Skin modifier fed by the flattened skin mesh.
    Skin,
    /// Subdivision applied after the skin modifier.
    Subdivision,
    /// Join collecting one tube's geometry.
    Tube(usize),
    /// Sphere placed and scaled for node `(tube, node)`.
    Transform(usize, usize),
    /// Join of the spheres for nodes `node - 1` and `node` of `tube`.
    PairJoin(usize, usize),
    /// Convex hull of the pair join with the same indices.
    Hull(usize, usize),
}

impl NodeKey {
    /// Returns the tube index for per-tube and per-node keys.
    #[must_use]
    pub fn tube_index(&self) -> Option<usize> {
        match *self {
            Self::Tube(t) | Self::Transform(t, _) | Self::PairJoin(t, _) | Self::Hull(t, _) => {
                Some(t)
            }
            _ => None,
        }
    }

    /// Returns the node index for per-node keys.
    #[must_use]
    pub fn node_index(&self) -> Option<usize> {
        match *self {
            Self::Transform(_, i) | Self::PairJoin(_, i) | Self::Hull(_, i) => Some(i),
            _ => None,
        }
    }

    /// Returns `true` for keys that belong to the join/transform/hull representation.
    #[must_use]
    pub fn is_geometry(&self) -> bool {
        !matches!(self, Self::Mirror | Self::Skin | Self::Subdivision)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output => f.write_str("Output"),
            Self::Sphere => f.write_str("Sphere"),
            Self::Join => f.write_str("Join"),
            Self::Symmetry => f.write_str("Symmetry"),
            Self::Join2 => f.write_str("Join2"),
            Self::Mirror => f.write_str("Mirror"),
            Self::Skin => f.write_str("Skin"),
            Self::Subdivision => f.write_str("Subdivision"),
            Self::Tube(t) => write!(f, "Tube_{t}"),
            Self::Transform(t, i) => write!(f, "Transform_{t}_{i}"),
            Self::PairJoin(t, i) => write!(f, "Join_{t}_{i}"),
            Self::Hull(t, i) => write!(f, "Hull_{t}_{i}"),
        }
    }
}

/// Error returned when a node name is not one the synchronizer generates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseKeyError;

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a generated node name")
    }
}

impl core::error::Error for ParseKeyError {}

fn index(s: &str) -> Result<usize, ParseKeyError> {
    // Digits only: `usize::from_str` also accepts a leading `+`.
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseKeyError);
    }
    s.parse().map_err(|_| ParseKeyError)
}

fn pair(s: &str) -> Result<(usize, usize), ParseKeyError> {
    let (t, i) = s.split_once('_').ok_or(ParseKeyError)?;
    Ok((index(t)?, index(i)?))
}

impl FromStr for NodeKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Output" => Self::Output,
            "Sphere" => Self::Sphere,
            "Join" => Self::Join,
            "Symmetry" => Self::Symmetry,
            "Join2" => Self::Join2,
            "Mirror" => Self::Mirror,
            "Skin" => Self::Skin,
            "Subdivision" => Self::Subdivision,
            _ => {
                if let Some(rest) = s.strip_prefix("Tube_") {
                    Self::Tube(index(rest)?)
                } else if let Some(rest) = s.strip_prefix("Transform_") {
                    let (t, i) = pair(rest)?;
                    Self::Transform(t, i)
                } else if let Some(rest) = s.strip_prefix("Join_") {
                    let (t, i) = pair(rest)?;
                    Self::PairJoin(t, i)
                } else if let Some(rest) = s.strip_prefix("Hull_") {
                    let (t, i) = pair(rest)?;
                    Self::Hull(t, i)
                } else {
                    return Err(ParseKeyError);
                }
            }
        })
    }
}

/// The kind of node to create for a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Group output.
    GroupOutput,
    /// UV sphere primitive.
    UvSphere,
    /// Geometry join.
    JoinGeometry,
    /// Translate/rotate/scale of incoming geometry.
    Transform,
    /// Convex hull of incoming geometry.
    ConvexHull,
    /// Mirror modifier.
    Mirror,
    /// Skin modifier.
    Skin,
    /// Subdivision surface.
    Subdivision,
}

/// A named input or output socket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Socket {
    /// `Geometry`, the general geometry socket.
    Geometry,
    /// `Mesh`, the output of primitive generators.
    Mesh,
    /// `Convex Hull`, the output of a convex hull node.
    ConvexHull,
}

/// A directed link from an output socket to an input socket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link {
    /// Source node.
    pub from: NodeKey,
    /// Output socket on the source.
    pub from_socket: Socket,
    /// Destination node.
    pub to: NodeKey,
    /// Input socket on the destination.
    pub to_socket: Socket,
}

impl Link {
    /// A link between the `Geometry` sockets of two nodes.
    #[must_use]
    pub const fn geometry(from: NodeKey, to: NodeKey) -> Self {
        Self::new(from, Socket::Geometry, to, Socket::Geometry)
    }

    /// A link between arbitrary sockets.
    #[must_use]
    pub const fn new(from: NodeKey, from_socket: Socket, to: NodeKey, to_socket: Socket) -> Self {
        Self {
            from,
            from_socket,
            to,
            to_socket,
        }
    }

    /// Returns `true` if either end is `key`.
    #[must_use]
    pub fn touches(&self, key: NodeKey) -> bool {
        self.from == key || self.to == key
    }
}
