//! Parallel frame rendering with a persistent scanline worker pool.
//!
//! Each frame is split into one task per image row. Worker threads pull rows
//! from a shared bounded queue, shade every pixel of the row against the
//! frame's read-only [`FrameContext`], and send the finished row back over a
//! per-frame result channel. Pixels share no mutable state, so the assembled
//! image is identical for any thread count and completion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::JoinHandle;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, bounded};
use glam::{Vec2, Vec4};
use halo_atmosphere::{FrameContext, FrameParams};
use tracing::{debug, info, warn};

use crate::error::RenderError;
use crate::image::FrameImage;

/// Queued row tasks per worker.
const TASKS_PER_WORKER: usize = 4;

/// State shared by every row of one frame.
struct FrameJob {
    context: FrameContext,
    width: u32,
    height: u32,
    cancelled: Arc<AtomicBool>,
    results: Sender<RenderedRow>,
}

struct RowTask {
    job: Arc<FrameJob>,
    row: u32,
}

/// A finished row, or `None` when the row was skipped after cancellation.
struct RenderedRow {
    row: u32,
    colors: Option<Vec<Vec4>>,
}

/// Requests cancellation of the frame currently rendering.
///
/// A request made while no frame is rendering cancels the next frame.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Ask the renderer to drop the rest of the current frame.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Renders whole frames on a pool of worker threads.
pub struct FrameRenderer {
    task_sender: Option<Sender<RowTask>>,
    workers: Vec<JoinHandle<()>>,
    cancelled: Arc<AtomicBool>,
    frames_rendered: AtomicU64,
}

/// Shade one row. Row 0 is the top of the image; pixel centers sit at half
/// offsets with the origin at the bottom-left corner.
fn shade_row(context: &FrameContext, row: u32, width: u32, height: u32) -> Vec<Vec4> {
    let y = (height - row) as f32 - 0.5;
    (0..width)
        .map(|x| context.shade(Vec2::new(x as f32 + 0.5, y)))
        .collect()
}

fn worker_loop(receiver: Receiver<RowTask>) {
    while let Ok(RowTask { job, row }) = receiver.recv() {
        let colors = if job.cancelled.load(Ordering::Relaxed) {
            None
        } else {
            Some(shade_row(&job.context, row, job.width, job.height))
        };
        // The frame may already have been abandoned by its caller.
        let _ = job.results.send(RenderedRow { row, colors });
    }
}

impl FrameRenderer {
    /// Spawn `thread_count` workers (at least one).
    pub fn new(thread_count: usize) -> Self {
        let thread_count = thread_count.max(1);
        let (task_sender, task_receiver) = bounded::<RowTask>(thread_count * TASKS_PER_WORKER);

        let workers = (0..thread_count)
            .filter_map(|i| {
                let receiver = task_receiver.clone();
                std::thread::Builder::new()
                    .name(format!("halo-row-{i}"))
                    .spawn(move || worker_loop(receiver))
                    .inspect_err(|e| warn!("failed to spawn render worker {i}: {e}"))
                    .ok()
            })
            .collect::<Vec<_>>();

        info!("Frame renderer started with {} workers", workers.len());

        Self {
            task_sender: Some(task_sender),
            workers,
            cancelled: Arc::new(AtomicBool::new(false)),
            frames_rendered: AtomicU64::new(0),
        }
    }

    /// Create a renderer with one worker per CPU, leaving one for the caller.
    pub fn with_defaults() -> Self {
        Self::new(num_cpus::get().saturating_sub(1).max(1))
    }

    /// Number of live worker threads.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Frames completed without cancellation.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered.load(Ordering::Relaxed)
    }

    /// A handle that cancels the frame in flight from any thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Render every pixel of the frame described by `params`.
    ///
    /// The resolution is taken from `params.resolution`, truncated to whole
    /// pixels. Blocks until all rows are back.
    pub fn render(&self, params: &FrameParams) -> Result<FrameImage, RenderError> {
        let width = params.resolution.x.max(0.0) as u32;
        let height = params.resolution.y.max(0.0) as u32;
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyResolution { width, height });
        }
        let task_sender = self.task_sender.as_ref().ok_or(RenderError::WorkersGone)?;

        let start = Instant::now();
        let (result_sender, result_receiver) = bounded::<RenderedRow>(height as usize);
        let job = Arc::new(FrameJob {
            context: FrameContext::new(*params),
            width,
            height,
            cancelled: Arc::clone(&self.cancelled),
            results: result_sender,
        });

        for row in 0..height {
            let task = RowTask {
                job: Arc::clone(&job),
                row,
            };
            task_sender
                .send(task)
                .map_err(|_| RenderError::WorkersGone)?;
        }
        // Workers hold the only remaining senders; the result channel closes
        // if they all die.
        drop(job);

        let mut image = FrameImage::new(width, height);
        let mut completed = 0;
        for _ in 0..height {
            let rendered = result_receiver
                .recv()
                .map_err(|_| RenderError::WorkersGone)?;
            if let Some(colors) = rendered.colors {
                image.write_row(rendered.row, &colors);
                completed += 1;
            }
        }

        if completed < height {
            self.cancelled.store(false, Ordering::Relaxed);
            warn!("Frame at t={:.3}s cancelled ({completed}/{height} rows)", params.time);
            return Err(RenderError::Cancelled {
                completed,
                total: height,
            });
        }

        self.frames_rendered.fetch_add(1, Ordering::Relaxed);
        debug!(
            "Rendered {width}x{height} frame at t={:.3}s in {:.1}ms",
            params.time,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(image)
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Drop for FrameRenderer {
    fn drop(&mut self) {
        // Closing the task queue ends every worker loop.
        self.task_sender.take();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}
