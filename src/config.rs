use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Order in which the driver takes states off the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Lowest path cost first - shortest paths since every step costs 1.
    BreadthFirst,
    /// Lowest heuristic first.
    Greedy,
    /// Lowest path cost + heuristic first.
    AStar,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::BreadthFirst, Method::Greedy, Method::AStar];
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::BreadthFirst => write!(f, "bfs"),
            Method::Greedy => write!(f, "greedy"),
            Method::AStar => write!(f, "astar"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl Display for UnknownMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown method: {}", self.0)
    }
}

impl Error for UnknownMethod {}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .cloned()
            .find(|method| method.to_string() == s)
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for &method in &Method::ALL {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
        assert_eq!(
            "dfs".parse::<Method>(),
            Err(UnknownMethod("dfs".to_owned()))
        );
    }
}
