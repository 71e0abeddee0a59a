use std::{
    future::Future,
    ops::{Deref, DerefMut},
};

use super::BoxedResultSendFuture;

/// Finishes a unit of work, either making it durable or discarding it.
pub trait TransactionOps {
    type Error: std::error::Error;

    type SubmitFuture<'s>: Future<Output = Result<(), Self::Error>>
        + 's
        + Send
    where
        Self: 's;

    fn submit<'s>(self) -> Self::SubmitFuture<'s>
    where
        Self: 's;

    type RollBackFuture<'r>: Future<Output = Result<(), Self::Error>>
        + 'r
        + Send
    where
        Self: 'r;

    fn rollback<'r>(self) -> Self::RollBackFuture<'r>
    where
        Self: 'r;
}

/// An open Postgres transaction borrowed from a pooled connection.
///
/// Dropping it without calling [`TransactionOps::submit`] rolls the work
/// back, so every early return leaves the database untouched.
pub struct SqlTransaction<'c>(pub deadpool_postgres::Transaction<'c>);

impl<'c> TransactionOps for SqlTransaction<'c> {
    type Error = tokio_postgres::Error;
    type RollBackFuture<'r>
        = BoxedResultSendFuture<'r, (), tokio_postgres::Error>
    where
        Self: 'r;
    type SubmitFuture<'s>
        = BoxedResultSendFuture<'s, (), tokio_postgres::Error>
    where
        Self: 's;

    fn submit<'s>(self) -> Self::SubmitFuture<'s>
    where
        Self: 's,
    {
        Box::pin(self.0.commit())
    }

    fn rollback<'r>(self) -> Self::RollBackFuture<'r>
    where
        Self: 'r,
    {
        Box::pin(self.0.rollback())
    }
}

impl<'c> Deref for SqlTransaction<'c> {
    type Target = deadpool_postgres::Transaction<'c>;

    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for SqlTransaction<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}
