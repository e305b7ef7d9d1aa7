use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    SelfLoopEdge(String),
    InvalidEdgeWeight(String, String, f64),
    UnknownVertex(String),
    PoppedEmptyQueue,
    NegativeEdgeWeight(String, String, f64),
    SymbolNotInCodeTable(char),
    MalformedBitStream(usize),
    TruncatedBitStream,
    FailedToReadGraphRecord(usize, std::io::Error),
    GraphRecordFieldCountMismatch(usize, usize),
    GraphRecordWeightNotParsable(usize, String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelfLoopEdge(vertex) => {
                write!(f, "Edge from vertex '{}' to itself is not allowed", vertex)
            }
            Self::InvalidEdgeWeight(from, to, weight) => {
                write!(
                    f,
                    "Edge {} -- {} has invalid weight {}. Weights must be finite and non-negative.",
                    from, to, weight
                )
            }
            Self::UnknownVertex(label) => {
                write!(f, "Vertex '{}' is not part of the graph", label)
            }
            Self::PoppedEmptyQueue => {
                write!(f, "Attempted to pop the minimum of an empty priority queue")
            }
            Self::NegativeEdgeWeight(from, to, weight) => {
                write!(
                    f,
                    "Edge {} -- {} has negative weight {}. Dijkstra requires non-negative weights.",
                    from, to, weight
                )
            }
            Self::SymbolNotInCodeTable(symbol) => {
                write!(f, "Symbol {:?} not present in code table", symbol)
            }
            Self::MalformedBitStream(position) => {
                write!(
                    f,
                    "Bit stream contains a character other than '0' or '1' at position {}",
                    position
                )
            }
            Self::TruncatedBitStream => {
                write!(f, "Bit stream ended in the middle of a code word")
            }
            Self::FailedToReadGraphRecord(line_number, error) => {
                write!(
                    f,
                    "Failed to read graph record on line {}: {}",
                    line_number, error
                )
            }
            Self::GraphRecordFieldCountMismatch(line_number, field_count) => {
                write!(
                    f,
                    "Graph record on line {} has {} fields. Expected origin, destination and weight.",
                    line_number, field_count
                )
            }
            Self::GraphRecordWeightNotParsable(line_number, token) => {
                write!(
                    f,
                    "Weight '{}' on line {} is not parsable as a real number",
                    token, line_number
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {}
