use std::{future::Future, pin::Pin};

pub mod transaction;

pub type BoxedResultSendFuture<'r, T, E> =
    Pin<Box<dyn Future<Output = Result<T, E>> + 'r + Send>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_aliases() {
        use std::marker::PhantomData;
        let _phantom: PhantomData<BoxedResultSendFuture<'_, (), ()>> =
            PhantomData;
    }

    #[tokio::test]
    async fn test_boxed_future_resolves() {
        let fut: BoxedResultSendFuture<'_, u8, ()> =
            Box::pin(async { Ok(7) });
        assert_eq!(fut.await, Ok(7));
    }
}
