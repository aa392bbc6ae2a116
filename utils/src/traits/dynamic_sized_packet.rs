pub trait DynamicSizedBitsPacket {
    fn get_packet_bits_count(&self) -> usize;

    /// bits count rounded up to whole bytes, trailing bits are padding
    fn get_packet_bytes_count(&self) -> usize {
        self.get_packet_bits_count().div_ceil(8)
    }
}
