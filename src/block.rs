use crate::algorithm::MAX_BLOCK_SIZE;

/// Accumulates message bytes until a full block is available for the
/// transform. Never holds a complete block between calls.
#[derive(Debug, Clone)]
pub(crate) struct BlockBuffer {
    buffer: [u8; MAX_BLOCK_SIZE],
    buffer_len: usize,
    block_size: usize,
}

impl BlockBuffer {
    pub fn new(block_size: usize) -> Self {
        debug_assert!(block_size > 0 && block_size <= MAX_BLOCK_SIZE);
        Self {
            buffer: [0u8; MAX_BLOCK_SIZE],
            buffer_len: 0,
            block_size,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer_len
    }

    pub fn is_empty(&self) -> bool {
        self.buffer_len == 0
    }

    pub fn clear(&mut self) {
        self.buffer = [0u8; MAX_BLOCK_SIZE];
        self.buffer_len = 0;
    }

    /// Append `message`, handing every completed block to `process_block` in
    /// order.
    pub fn update(&mut self, message: &[u8], mut process_block: impl FnMut(&[u8])) {
        let block_size = self.block_size;

        let mut offset = 0;
        if self.buffer_len > 0 {
            let needed = block_size - self.buffer_len;
            let to_copy = needed.min(message.len());
            self.buffer[self.buffer_len..self.buffer_len + to_copy]
                .copy_from_slice(&message[..to_copy]);
            self.buffer_len += to_copy;
            offset += to_copy;

            if self.buffer_len == block_size {
                process_block(&self.buffer[..block_size]);
                self.buffer_len = 0;
            }
        }

        if offset < message.len() {
            let mut blocks = message[offset..].chunks_exact(block_size);
            for block in &mut blocks {
                process_block(block);
            }
            let remainder = blocks.remainder();
            self.buffer[..remainder.len()].copy_from_slice(remainder);
            self.buffer_len = remainder.len();
        }
    }
}

pub(crate) fn load_words_be(block: &[u8], words: &mut [u32]) {
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

pub(crate) fn load_words_le(block: &[u8], words: &mut [u32]) {
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

pub(crate) fn load_wide_words_be(block: &[u8], words: &mut [u64]) {
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn collect_blocks(buffer: &mut BlockBuffer, message: &[u8]) -> Vec<Vec<u8>> {
        let mut blocks = Vec::new();
        buffer.update(message, |block| blocks.push(block.to_vec()));
        blocks
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 0, 1)]
    #[case(15, 0, 15)]
    #[case(16, 1, 0)]
    #[case(17, 1, 1)]
    #[case(48, 3, 0)]
    #[case(50, 3, 2)]
    fn update_drains_full_blocks(
        #[case] message_len: usize,
        #[case] expected_blocks: usize,
        #[case] expected_buffered: usize,
    ) {
        let mut buffer = BlockBuffer::new(16);
        let message: Vec<u8> = (0..message_len as u8).collect();

        let blocks = collect_blocks(&mut buffer, &message);

        assert_eq!(blocks.len(), expected_blocks);
        assert_eq!(buffer.len(), expected_buffered);
        assert_eq!(blocks.concat(), message[..expected_blocks * 16]);
    }

    #[test]
    fn partial_blocks_are_joined_across_updates() {
        let mut buffer = BlockBuffer::new(4);

        assert!(collect_blocks(&mut buffer, b"ab").is_empty());
        assert!(collect_blocks(&mut buffer, b"c").is_empty());
        assert_eq!(buffer.len(), 3);

        let blocks = collect_blocks(&mut buffer, b"defghij");

        assert_eq!(blocks, vec![b"abcd".to_vec(), b"efgh".to_vec()]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn buffer_never_retains_a_full_block() {
        let mut buffer = BlockBuffer::new(8);
        for len in 0..40 {
            collect_blocks(&mut buffer, &vec![0xAA; len]);
            assert!(buffer.len() < 8);
        }
    }

    #[test]
    fn clear_discards_buffered_bytes() {
        let mut buffer = BlockBuffer::new(8);
        collect_blocks(&mut buffer, b"abc");

        buffer.clear();

        assert!(buffer.is_empty());
        let blocks = collect_blocks(&mut buffer, b"12345678");
        assert_eq!(blocks, vec![b"12345678".to_vec()]);
    }

    #[test]
    fn words_load_with_requested_byte_order() {
        let bytes = [0x78, 0x56, 0x34, 0x12, 0xFF, 0x00, 0xFF, 0x00];
        let mut le = [0u32; 2];
        let mut be = [0u32; 2];
        let mut wide = [0u64; 1];

        load_words_le(&bytes, &mut le);
        load_words_be(&bytes, &mut be);
        load_wide_words_be(&bytes, &mut wide);

        assert_eq!(le, [0x1234_5678, 0x00FF_00FF]);
        assert_eq!(be, [0x7856_3412, 0xFF00_FF00]);
        assert_eq!(wide, [0x7856_3412_FF00_FF00]);
    }
}
