//! `method_catalog!` — expands one grouped list of method names into the
//! [`Method`](super::Method) enum, its [`Category`](super::Category), and one
//! façade sub-client per category.

macro_rules! method_catalog {
    (
        $(
            $(#[$cat_doc:meta])*
            $Category:ident => $accessor:ident : $Sub:ident {
                $( $name:ident => $Variant:ident ),* $(,)?
            }
        ),* $(,)?
    ) => {
        /// Method category, one per façade sub-client.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Category {
            $( $Category, )*
        }

        impl Category {
            pub const ALL: &'static [Category] = &[ $( Category::$Category, )* ];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Category::$Category => stringify!($accessor), )*
                }
            }

            /// Methods in this category, in catalog order.
            pub fn methods(&self) -> &'static [Method] {
                match self {
                    $( Category::$Category => &[ $( Method::$Variant, )* ], )*
                }
            }
        }

        /// Known Planyo API methods.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Method {
            $( $( $Variant, )* )*
        }

        impl Method {
            pub const ALL: &'static [Method] = &[ $( $( Method::$Variant, )* )* ];

            /// Wire name sent as the `method` field.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $( Method::$Variant => stringify!($name), )* )*
                }
            }

            pub fn category(&self) -> Category {
                match self {
                    $( $( Method::$Variant => Category::$Category, )* )*
                }
            }

            /// Look up a wire name. `None` for names outside the catalog.
            pub fn lookup(name: &str) -> Option<Method> {
                match name {
                    $( $( stringify!($name) => Some(Method::$Variant), )* )*
                    _ => None,
                }
            }
        }

        $(
            $(#[$cat_doc])*
            #[cfg(feature = "http")]
            pub struct $Sub<'a> {
                pub(crate) client: &'a crate::client::PlanyoClient,
            }

            #[cfg(feature = "http")]
            impl<'a> $Sub<'a> {
                $(
                    #[doc = concat!("Prepare a `", stringify!($name), "` call.")]
                    pub fn $name(&self) -> crate::client::MethodCall<'a> {
                        self.client.method(Method::$Variant)
                    }
                )*
            }
        )*

        #[cfg(feature = "http")]
        impl crate::client::PlanyoClient {
            $(
                pub fn $accessor(&self) -> $Sub<'_> {
                    $Sub { client: self }
                }
            )*
        }
    };
}

pub(crate) use method_catalog;
