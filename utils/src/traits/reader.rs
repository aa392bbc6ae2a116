use std::io;

pub trait ReadFrom<R: io::Read>: Sized {
    type Error;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error>;
}

/// reads from a bit cursor, the cursor is left right after the consumed bits
pub trait BitwiseReadFrom<R>: Sized {
    type Error;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error>;
}

/// reads the rest of a packet whose leading fields were read ahead
pub trait BitwiseReadReaminingFrom<Header, R>: Sized {
    type Error;
    fn read_remaining_from(header: Header, reader: &mut R) -> Result<Self, Self::Error>;
}
