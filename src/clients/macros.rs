/// Generate cart client methods that dispatch a single intent and report
/// whether the cart changed.
macro_rules! cart_intent_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) as $intent:expr) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<bool, $crate::error::CartError> {
                tracing::debug!("Sending request");
                self.inner.dispatch($intent).await.map_err(communication_error)
            }
        }
    };
}

/// Generate order client methods with oneshot channel boilerplate.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
