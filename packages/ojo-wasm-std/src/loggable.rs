use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::Location;

use error_stack::{AttachmentKind, Frame, FrameKind, Report};
use itertools::Itertools;

/// A flattened rendering of an [`error_stack::Report`]: one node per context
/// frame, carrying that frame's printable attachments and source location,
/// with causal dependencies expressed through `cause`.
#[derive(PartialEq, Eq, Debug, Default)]
pub struct LoggableError {
    pub msg: String,
    pub attachments: Vec<String>,
    pub location: String,
    pub cause: Option<Box<LoggableError>>,
}

impl Display for LoggableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let msg = if self.attachments.is_empty() {
            self.msg.clone()
        } else {
            let attachments = self.attachments.iter().map(|a| format!("{:?}", a)).join(", ");
            format!("{} ({})", self.msg, attachments)
        };

        match &self.cause {
            None => write!(f, "{}", msg),
            Some(cause) => write!(f, "{}: {}", msg, cause),
        }
    }
}

impl Error for LoggableError {}

impl<T> From<&Report<T>> for LoggableError {
    fn from(report: &Report<T>) -> Self {
        let mut errors: Vec<LoggableError> = Vec::new();

        // frames appear in stack order: all attachments of an error first,
        // then its context frame, which closes the error
        let mut frames = VecDeque::from_iter(report.frames());
        while !frames.is_empty() {
            let mut error = LoggableError::default();
            let mut attachments = Vec::new();

            while let Some(frame) = frames.pop_front() {
                match frame.kind() {
                    FrameKind::Context(context) => {
                        error.msg = context.to_string();
                        break;
                    }
                    FrameKind::Attachment(AttachmentKind::Printable(printable)) => {
                        attachments.push(printable.to_string())
                    }
                    FrameKind::Attachment(AttachmentKind::Opaque(_)) => {
                        match attached_location(frame) {
                            Some(location) => error.location = location,
                            None => attachments.push("opaque attachment".to_string()),
                        }
                    }
                    FrameKind::Attachment(_) => attachments.push("opaque attachment".to_string()),
                }
            }

            // stack order is the reverse of attachment order
            attachments.reverse();
            error.attachments = attachments;
            errors.push(error);
        }

        chain_causes(errors).unwrap_or_default()
    }
}

fn attached_location(frame: &Frame) -> Option<String> {
    frame.downcast_ref::<Location>().map(Location::to_string)
}

fn chain_causes(errors: Vec<LoggableError>) -> Option<LoggableError> {
    errors
        .into_iter()
        // the outermost error appears first, so the causal chain is built back to front
        .rev()
        .fold(None, |cause, mut error| {
            error.cause = cause.map(Box::new);
            Some(error)
        })
}
