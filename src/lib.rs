pub mod configuration;

pub mod graph {
    pub mod undirectedmatrix;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod distribution {
        pub mod uniform;
        pub mod uniformmanager;
    }

    pub mod interpolation {
        pub mod interpolationerror;
        pub mod interpolator;
        pub mod linearinterpolator;
        pub mod stepinterpolator;
        pub mod cubicspline;
        pub mod resample;
        pub mod interpolatorgenerator;
        pub mod interpolatorgeneratormanager;
    }
}
