use std::io;

use byteorder::ReadBytesExt;
use utils::traits::reader::ReadFrom;

use crate::{errors::AV1CodecError, obu_header::ObuHeader};

/// reads the one byte obu header, the payload is left in the reader
impl<R: io::Read> ReadFrom<R> for ObuHeader {
    type Error = AV1CodecError;
    fn read_from(reader: &mut R) -> Result<Self, Self::Error> {
        let first_byte = reader.read_u8().map_err(|err| match err.kind() {
            io::ErrorKind::UnexpectedEof => AV1CodecError::NotEnoughData,
            _ => AV1CodecError::Io(err),
        })?;
        first_byte.try_into()
    }
}
