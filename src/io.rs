//! Safetensors I/O for single-channel signals.
//!
//! Reader: loads the `"signal"` tensor (F32 or F64, shape `[T]` or `[1, T]`).
//! Writer: [`StWriter`] for F32/F64 tensors, [`write_signal`] for the
//! conditioned output.
use ndarray::Array1;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, SignalError};

// ── Low-level safetensors parser ─────────────────────────────────────────────

fn format_err(msg: impl Into<String>) -> SignalError {
    SignalError::Format(msg.into())
}

fn parse_header(bytes: &[u8]) -> Result<(HashMap<String, serde_json::Value>, usize)> {
    let len_bytes: [u8; 8] = bytes
        .get(..8)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| format_err("file too small"))?;
    let data_start = usize::try_from(u64::from_le_bytes(len_bytes))
        .ok()
        .and_then(|n| n.checked_add(8))
        .ok_or_else(|| format_err("header length overflows"))?;
    let raw = bytes
        .get(8..data_start)
        .ok_or_else(|| format_err("header length exceeds file size"))?;
    let header: HashMap<String, serde_json::Value> = serde_json::from_slice(raw)
        .map_err(|e| format_err(format!("bad header: {e}")))?;
    Ok((header, data_start))
}

fn shape_of(entry: &serde_json::Value) -> Result<Vec<usize>> {
    entry["shape"]
        .as_array()
        .ok_or_else(|| format_err("missing 'shape'"))?
        .iter()
        .map(|v| {
            v.as_u64()
                .and_then(|d| usize::try_from(d).ok())
                .ok_or_else(|| format_err("bad shape entry"))
        })
        .collect()
}

fn read_tensor_f64(bytes: &[u8], data_start: usize, entry: &serde_json::Value) -> Result<Vec<f64>> {
    let offsets = entry["data_offsets"]
        .as_array()
        .ok_or_else(|| format_err("missing 'data_offsets'"))?;
    let offset = |i: usize| {
        offsets
            .get(i)
            .and_then(|v| v.as_u64())
            .and_then(|o| usize::try_from(o).ok())
            .and_then(|o| o.checked_add(data_start))
    };
    let (Some(start), Some(end)) = (offset(0), offset(1)) else {
        return Err(format_err("bad 'data_offsets'"));
    };
    if start > end {
        return Err(format_err(format!("data_offsets reversed: {start} > {end}")));
    }
    let raw = bytes
        .get(start..end)
        .ok_or_else(|| format_err("tensor data out of range"))?;

    match entry["dtype"].as_str() {
        Some("F64") => Ok(raw
            .chunks_exact(8)
            .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
            .collect()),
        Some("F32") => Ok(raw
            .chunks_exact(4)
            .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]) as f64)
            .collect()),
        other => Err(format_err(format!("unsupported dtype {other:?}"))),
    }
}

// ── Public structs ───────────────────────────────────────────────────────────

/// A single-channel recording loaded from a safetensors file.
pub struct SignalFile {
    /// Samples, NaN marking missing values.
    pub signal: Array1<f64>,
}

impl SignalFile {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let (header, data_start) = parse_header(&bytes)?;

        let entry = header.get("signal").ok_or_else(|| format_err("missing 'signal' key"))?;
        let shape = shape_of(entry)?;
        let n: usize = match shape.as_slice() {
            [t] => *t,
            [1, t] => *t,
            _ => return Err(format_err(format!("expected a 1-D signal, got shape {shape:?}"))),
        };

        let values = read_tensor_f64(&bytes, data_start, entry)?;
        if values.len() != n {
            return Err(format_err(format!(
                "shape says {n} samples, data holds {}",
                values.len()
            )));
        }
        Ok(SignalFile { signal: Array1::from_vec(values) })
    }
}

/// Minimal safetensors writer for F32/F64 tensors.
///
/// ```rust,no_run
/// use kawafilter::io::StWriter;
/// use std::path::Path;
/// let mut w = StWriter::new();
/// w.add_f64("signal", &[1.0, 2.0, 3.0], &[3]);
/// w.write(Path::new("/tmp/out.safetensors")).unwrap();
/// ```
#[derive(Default)]
pub struct StWriter {
    entries: Vec<Entry>,
}

struct Entry {
    name: String,
    dtype: &'static str,
    shape: Vec<usize>,
    bytes: Vec<u8>,
}

impl StWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_f64(&mut self, name: &str, data: &[f64], shape: &[usize]) {
        let bytes = data.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.push(name, "F64", shape, bytes);
    }

    pub fn add_f32(&mut self, name: &str, data: &[f32], shape: &[usize]) {
        let bytes = data.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.push(name, "F32", shape, bytes);
    }

    pub fn add_signal(&mut self, name: &str, signal: &Array1<f64>) {
        let bytes = signal.iter().flat_map(|v| v.to_le_bytes()).collect();
        self.push(name, "F64", &[signal.len()], bytes);
    }

    fn push(&mut self, name: &str, dtype: &'static str, shape: &[usize], bytes: Vec<u8>) {
        self.entries.push(Entry { name: name.to_string(), dtype, shape: shape.to_vec(), bytes });
    }

    /// Serialise header and tensor data into one buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let header: serde_json::Map<String, serde_json::Value> = self
            .entries
            .iter()
            .scan(0usize, |offset, e| {
                let start = *offset;
                *offset += e.bytes.len();
                Some((
                    e.name.clone(),
                    serde_json::json!({
                        "dtype": e.dtype,
                        "shape": e.shape,
                        "data_offsets": [start, *offset],
                    }),
                ))
            })
            .collect();

        let mut hdr = serde_json::to_vec(&header)
            .map_err(|e| format_err(format!("cannot encode header: {e}")))?;
        // Data section starts 8-byte aligned.
        hdr.resize(hdr.len().next_multiple_of(8), b' ');

        let data_len: usize = self.entries.iter().map(|e| e.bytes.len()).sum();
        let mut out = Vec::with_capacity(8 + hdr.len() + data_len);
        out.extend_from_slice(&(hdr.len() as u64).to_le_bytes());
        out.extend_from_slice(&hdr);
        for e in &self.entries {
            out.extend_from_slice(&e.bytes);
        }
        Ok(out)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

/// Write a conditioned signal (and its baseline, if any) to `path`.
pub fn write_signal(path: &Path, signal: &Array1<f64>, baseline: Option<f64>) -> Result<()> {
    let mut w = StWriter::new();
    w.add_signal("signal", signal);
    if let Some(b) = baseline {
        w.add_f64("baseline", &[b], &[1]);
    }
    w.write(path)
}
