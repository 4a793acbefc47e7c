use std::io::{self, Read};

use crate::{Algorithm, Digest, Engine, Result};

const READ_CHUNK_SIZE: usize = 64 * 1024;

impl Engine {
    /// Feed each chunk to `update` in order.
    pub fn update_chunks<I>(&mut self, chunks: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for chunk in chunks {
            self.update(chunk.as_ref());
        }
    }

    /// Drain `reader` into the engine without holding the whole input in
    /// memory. Returns the number of bytes read.
    pub fn update_reader<R: Read>(&mut self, mut reader: R) -> Result<u64> {
        let mut chunk = vec![0u8; READ_CHUNK_SIZE];
        let mut total = 0u64;
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            self.update(&chunk[..n]);
            total += n as u64;
        }
        Ok(total)
    }
}

impl io::Write for Engine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn hash_chunks<I>(algorithm: Algorithm, chunks: I) -> Digest
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut engine = Engine::new(algorithm);
    engine.update_chunks(chunks);
    engine.finalize()
}

pub fn hash_reader<R: Read>(algorithm: Algorithm, reader: R) -> Result<Digest> {
    let mut engine = Engine::new(algorithm);
    engine.update_reader(reader)?;
    Ok(engine.finalize())
}
